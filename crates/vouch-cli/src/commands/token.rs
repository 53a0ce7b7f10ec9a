//! Token commands.
//!
//! `vouch token sign` - Sign a claims payload into a token.
//! `vouch token verify` - Verify a token against a public key.
//! `vouch token inspect` - Decode a token without verifying it.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use vouch_jwt::{Header, Keypair, Payload, Token, TokenSigner, TokenVerifier};

/// Resolve a private key from either a file path or a hex-encoded string.
fn resolve_private_key(key: Option<String>) -> anyhow::Result<Keypair> {
    let key_str = key.context(
        "Private key not provided. Either pass --key <path|hex> or set VOUCH_PRIVATE_KEY",
    )?;

    // If it looks like a file path and the file exists, load from file
    let path = Path::new(&key_str);
    if path.exists() {
        return Keypair::load_from_file(path)
            .with_context(|| format!("Failed to load private key from file: {}", path.display()));
    }

    Keypair::from_seed_hex(key_str.trim())
        .context("Failed to parse private key. Expected hex-encoded Ed25519 seed")
}

/// Resolve a public key from either a file path or a hex-encoded string.
fn resolve_public_key(key: Option<String>) -> anyhow::Result<[u8; 32]> {
    let key_str = key.context(
        "Public key not provided. Either pass --key <path|hex> or set VOUCH_PUBLIC_KEY",
    )?;

    let path = Path::new(&key_str);
    if path.exists() {
        return vouch_jwt::load_public_key_file(path)
            .with_context(|| format!("Failed to load public key from file: {}", path.display()));
    }

    vouch_jwt::load_public_key_hex(key_str.trim())
        .context("Failed to parse public key. Expected hex-encoded Ed25519 public key")
}

/// Parse a duration string like "24h", "7d", "30m", "60s".
fn parse_duration(s: &str) -> anyhow::Result<chrono::Duration> {
    let s = s.trim().to_lowercase();

    if let Some(hours) = s.strip_suffix('h') {
        let h: i64 = hours.parse()?;
        return Ok(chrono::Duration::hours(h));
    }
    if let Some(days) = s.strip_suffix('d') {
        let d: i64 = days.parse()?;
        return Ok(chrono::Duration::days(d));
    }
    if let Some(minutes) = s.strip_suffix('m') {
        let m: i64 = minutes.parse()?;
        return Ok(chrono::Duration::minutes(m));
    }
    if let Some(seconds) = s.strip_suffix('s') {
        let sec: i64 = seconds.parse()?;
        return Ok(chrono::Duration::seconds(sec));
    }

    // No suffix means hours
    let h: i64 = s.parse()?;
    Ok(chrono::Duration::hours(h))
}

fn build_header(kid: Option<String>, jku: Option<String>) -> anyhow::Result<Header> {
    match (kid, jku) {
        (None, None) => Ok(Header::new()),
        (Some(kid), None) => Ok(Header::with_key_id(&kid)?),
        (Some(kid), Some(jku)) => Ok(Header::with_key_url(&kid, &jku)?),
        (None, Some(_)) => anyhow::bail!("--jku requires --kid"),
    }
}

/// Resolve a token argument that may be a file path.
fn resolve_token(token: String) -> anyhow::Result<String> {
    if Path::new(&token).exists() {
        return Ok(fs::read_to_string(&token)?.trim().to_string());
    }
    Ok(token)
}

/// Sign a claims payload into a token.
pub fn sign(
    key: Option<String>,
    claims: String,
    kid: Option<String>,
    jku: Option<String>,
    expires_in: Option<String>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let keypair = resolve_private_key(key)?;
    let signer = TokenSigner::new(keypair);

    let mut value: serde_json::Value =
        serde_json::from_str(&claims).context("claims must be valid JSON")?;

    if let Some(expires_in) = &expires_in {
        let duration = parse_duration(expires_in)?;
        let exp = (chrono::Utc::now() + duration).timestamp();
        match &mut value {
            serde_json::Value::Object(map) => {
                map.insert("exp".to_string(), serde_json::json!(exp));
            }
            _ => anyhow::bail!("--expires-in needs an object payload to hold the exp claim"),
        }
    }

    let header = build_header(kid, jku)?;
    let payload = Payload::from_json(value);
    let wire = signer.sign(&header, &payload)?;

    if let Some(output_path) = output {
        fs::write(&output_path, &wire)?;
        println!("✔ Token written to: {}", output_path.display());
        if let Some(e) = &expires_in {
            println!("  Expires in: {}", e);
        }
    } else {
        println!("{}", wire);
    }

    Ok(())
}

/// Verify a token against a public key.
pub fn verify(key: Option<String>, require_expiration: bool, token: String) -> anyhow::Result<()> {
    let public_key = resolve_public_key(key)?;
    let token_str = resolve_token(token)?;

    let parsed: Token = match token_str.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("✖ Token is malformed: {}", e);
            std::process::exit(1);
        }
    };

    let verifier = TokenVerifier::new().require_expiration(require_expiration);
    match verifier.verify(&parsed, &public_key) {
        Ok(()) => {
            println!("✔ Token is valid");
            if let Some(kid) = &parsed.header().kid {
                println!("  Key id: {}", kid);
            }
            if let Some(exp) = parsed.payload().claim_seconds("exp") {
                match chrono::DateTime::from_timestamp(exp, 0) {
                    Some(dt) => println!("  Expires at: {}", dt),
                    None => println!("  Expires at: {}", exp),
                }
            }
        }
        Err(e) => {
            println!("✖ Token verification failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Decode a token without verifying it.
pub fn inspect(token: String) -> anyhow::Result<()> {
    let token_str = resolve_token(token)?;
    let parsed: Token = token_str.parse()?;

    println!("Header:");
    println!("{}", serde_json::to_string_pretty(parsed.header())?);
    println!();
    println!("Payload:");
    println!(
        "{}",
        serde_json::to_string_pretty(&parsed.payload().as_json())?
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("24h").unwrap(), chrono::Duration::hours(24));
        assert_eq!(parse_duration("7d").unwrap(), chrono::Duration::days(7));
        assert_eq!(
            parse_duration("30m").unwrap(),
            chrono::Duration::minutes(30)
        );
        assert_eq!(
            parse_duration("60s").unwrap(),
            chrono::Duration::seconds(60)
        );
        assert_eq!(parse_duration("2").unwrap(), chrono::Duration::hours(2));
        assert!(parse_duration("soon").is_err());
    }

    #[test]
    fn test_sign_and_verify_with_files() {
        let dir = tempdir().unwrap();
        let private_path = dir.path().join("private.key");
        let public_path = dir.path().join("public.key");
        let token_path = dir.path().join("token.jwt");

        let keypair = Keypair::generate();
        keypair.save_to_files(&private_path, &public_path).unwrap();

        sign(
            Some(private_path.to_string_lossy().to_string()),
            r#"{"sub":"alice"}"#.to_string(),
            None,
            None,
            Some("24h".to_string()),
            Some(token_path.clone()),
        )
        .unwrap();

        assert!(token_path.exists());

        verify(
            Some(public_path.to_string_lossy().to_string()),
            true,
            token_path.to_string_lossy().to_string(),
        )
        .unwrap();
    }

    #[test]
    fn test_sign_with_hex_key() {
        let dir = tempdir().unwrap();
        let token_path = dir.path().join("token.jwt");

        let keypair = Keypair::generate();

        sign(
            Some(keypair.seed_hex()),
            r#"{"sub":"alice"}"#.to_string(),
            Some("key-1".to_string()),
            Some("https://keys.example.com/k".to_string()),
            None,
            Some(token_path.clone()),
        )
        .unwrap();

        let wire = fs::read_to_string(&token_path).unwrap();
        let token: Token = wire.parse().unwrap();
        assert_eq!(token.header().kid.as_deref(), Some("key-1"));
        assert_eq!(
            token.header().jku.as_deref(),
            Some("https://keys.example.com/k")
        );

        verify(Some(keypair.public_key_hex()), false, wire).unwrap();
    }

    #[test]
    fn test_expires_in_sets_exp_claim() {
        let dir = tempdir().unwrap();
        let token_path = dir.path().join("token.jwt");

        let keypair = Keypair::generate();
        let before = chrono::Utc::now().timestamp();

        sign(
            Some(keypair.seed_hex()),
            r#"{"sub":"alice"}"#.to_string(),
            None,
            None,
            Some("1h".to_string()),
            Some(token_path.clone()),
        )
        .unwrap();

        let token: Token = fs::read_to_string(&token_path)
            .unwrap()
            .parse()
            .unwrap();
        let exp = token.payload().claim_seconds("exp").unwrap();
        assert!(exp >= before + 3600);
    }

    #[test]
    fn test_expires_in_rejects_non_object_payload() {
        let keypair = Keypair::generate();
        let result = sign(
            Some(keypair.seed_hex()),
            r#""just a string""#.to_string(),
            None,
            None,
            Some("1h".to_string()),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_jku_requires_kid() {
        let keypair = Keypair::generate();
        let result = sign(
            Some(keypair.seed_hex()),
            r#"{"sub":"alice"}"#.to_string(),
            None,
            Some("https://keys.example.com/k".to_string()),
            None,
            None,
        );
        assert!(result.is_err());
    }
}
