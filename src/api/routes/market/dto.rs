use {
    crate::{api::routes::dto, infra::auth, util::serialize},
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// The `market` route payload.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    #[serde(flatten)]
    pub prefix: dto::Prefix,
    #[serde(flatten)]
    pub trade: dto::Trade,
    #[serde(default)]
    #[serde_as(as = "serialize::Hex")]
    pub sig: Vec<u8>,
}

impl auth::Signable for Market {
    fn serialize(&self) -> Vec<u8> {
        let mut buf = self.prefix.serialize();
        buf.extend_from_slice(&self.trade.serialize());
        buf
    }

    fn sig(&self) -> &[u8] {
        &self.sig
    }

    fn set_sig(&mut self, sig: Vec<u8>) {
        self.sig = sig;
    }
}

impl auth::Stampable for Market {
    fn stamp(&mut self, server_time: u64) {
        self.prefix.server_time = server_time;
    }
}
