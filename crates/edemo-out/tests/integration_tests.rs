//! Integration tests for the demo result renderers.
//!
//! These exercise the embedded template set end to end: typed result record
//! in, surface-replacing HTML fragment out.

use edemo_out::{
    error_html, loading_html, render_rsa_results, render_sha256_results, RsaKeyPair, RsaResult,
    RsaStep, Sha256Result, Sha256Step,
};

fn rsa_fixture() -> RsaResult {
    RsaResult {
        key_pair: Some(RsaKeyPair {
            n: "3233".to_string(),
            e: "17".to_string(),
            d: "2753".to_string(),
            p: "61".to_string(),
            q: "53".to_string(),
            phi_n: "3120".to_string(),
        }),
        steps: vec![RsaStep {
            step_number: 1,
            title: "Choose primes".to_string(),
            description: "Two distinct primes are selected".to_string(),
            formula: "n = p × q".to_string(),
            result: "n = 3233".to_string(),
        }],
        success: true,
        original_message: "hello".to_string(),
        decrypted_text: Some("hello".to_string()),
    }
}

#[test]
fn test_rsa_panel_shows_key_material_and_steps() {
    let html = render_rsa_results(&rsa_fixture()).unwrap();

    assert!(html.contains("Public Key"));
    assert!(html.contains("Private Key"));
    assert!(html.contains("n = 3233"));
    assert!(html.contains("d = 2753"));
    assert!(html.contains("φ(n) = 3120"));
    assert!(html.contains("Choose primes"));
    assert!(html.contains("Result: n = 3233"));
}

#[test]
fn test_rsa_panel_success_banner() {
    let html = render_rsa_results(&rsa_fixture()).unwrap();
    assert!(html.contains("success-message"));
    assert!(html.contains("hello"));
    assert!(html.contains("Decrypted text"));
}

#[test]
fn test_rsa_panel_without_key_pair_or_success() {
    let mut result = rsa_fixture();
    result.key_pair = None;
    result.success = false;
    result.decrypted_text = None;

    let html = render_rsa_results(&result).unwrap();
    assert!(!html.contains("key-display"));
    assert!(!html.contains("success-message"));
    assert!(html.contains("step-card"));
}

#[test]
fn test_sha256_panel_shows_hash_and_steps() {
    let result = Sha256Result {
        hash: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824".to_string(),
        steps: vec![
            Sha256Step {
                step_number: 1,
                title: "Preprocessing".to_string(),
                description: "Message is padded to a multiple of 512 bits".to_string(),
                data: vec!["01101000 01100101 ...".to_string()],
            },
            Sha256Step {
                step_number: 2,
                title: "Compression".to_string(),
                description: "64 rounds over the message schedule".to_string(),
                data: vec![],
            },
        ],
    };

    let html = render_sha256_results(&result).unwrap();
    assert!(html.contains("SHA-256 Hash"));
    assert!(html.contains("2cf24dba5fb0a30e"));
    assert!(html.contains("Preprocessing"));
    assert!(html.contains("step-data-item"));
    assert!(html.contains("hash computed successfully"));
}

#[test]
fn test_sha256_step_without_data_renders_no_data_block() {
    let result = Sha256Result {
        hash: "abc".to_string(),
        steps: vec![Sha256Step {
            step_number: 1,
            title: "Compression".to_string(),
            description: "64 rounds".to_string(),
            data: vec![],
        }],
    };

    let html = render_sha256_results(&result).unwrap();
    assert!(!html.contains("step-data"));
}

#[test]
fn test_error_and_loading_share_fragment_conventions() {
    let error = error_html("Please enter a message");
    assert!(error.contains("error-message"));
    assert!(error.contains("Please enter a message"));

    let loading = loading_html("Processing...");
    assert!(loading.contains("loading"));
    assert!(loading.contains("Processing..."));
}
