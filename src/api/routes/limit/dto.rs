use {
    crate::{api::routes::dto, infra::auth, util::serialize},
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// The `limit` route payload.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Limit {
    #[serde(flatten)]
    pub prefix: dto::Prefix,
    #[serde(flatten)]
    pub trade: dto::Trade,
    /// Quote atoms per base atom.
    pub rate: u64,
    /// Time-in-force code.
    pub tif: u8,
    #[serde(default)]
    #[serde_as(as = "serialize::Hex")]
    pub sig: Vec<u8>,
}

impl auth::Signable for Limit {
    fn serialize(&self) -> Vec<u8> {
        let mut buf = self.prefix.serialize();
        buf.extend_from_slice(&self.trade.serialize());
        buf.extend_from_slice(&self.rate.to_be_bytes());
        buf.push(self.tif);
        buf
    }

    fn sig(&self) -> &[u8] {
        &self.sig
    }

    fn set_sig(&mut self, sig: Vec<u8>) {
        self.sig = sig;
    }
}

impl auth::Stampable for Limit {
    fn stamp(&mut self, server_time: u64) {
        self.prefix.server_time = server_time;
    }
}
