use {
    crate::{api::routes::dto, infra::auth, util::serialize},
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// The `cancel` route payload.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cancel {
    #[serde(flatten)]
    pub prefix: dto::Prefix,
    /// The id of the order to cancel.
    #[serde_as(as = "serialize::Hex")]
    pub target: Vec<u8>,
    #[serde(default)]
    #[serde_as(as = "serialize::Hex")]
    pub sig: Vec<u8>,
}

impl auth::Signable for Cancel {
    fn serialize(&self) -> Vec<u8> {
        let mut buf = self.prefix.serialize();
        buf.extend_from_slice(&self.target);
        buf
    }

    fn sig(&self) -> &[u8] {
        &self.sig
    }

    fn set_sig(&mut self, sig: Vec<u8>) {
        self.sig = sig;
    }
}

impl auth::Stampable for Cancel {
    fn stamp(&mut self, server_time: u64) {
        self.prefix.server_time = server_time;
    }
}
