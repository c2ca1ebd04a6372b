//! Success shapes of the module's serialized output.
//!
//! Unknown fields are ignored on purpose: the module attaches internal
//! bookkeeping (intermediate ciphertext values and the like) that the
//! rendering layer never shows.

use serde::{Deserialize, Serialize};

/// Generated key material, all values as decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsaKeyPair {
    pub n: String,
    pub e: String,
    pub d: String,
    pub p: String,
    pub q: String,
    pub phi_n: String,
}

/// One explained stage of the RSA computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsaStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    pub formula: String,
    pub result: String,
}

/// Full output of one RSA demonstration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsaResult {
    #[serde(default)]
    pub key_pair: Option<RsaKeyPair>,
    pub steps: Vec<RsaStep>,
    pub success: bool,
    pub original_message: String,
    #[serde(default)]
    pub decrypted_text: Option<String>,
}

/// One explained stage of the SHA-256 computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sha256Step {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub data: Vec<String>,
}

/// Full output of one SHA-256 demonstration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sha256Result {
    pub hash: String,
    pub steps: Vec<Sha256Step>,
}
