//! Key management commands.
//!
//! `vouch keys generate` - Generate a new Ed25519 keypair.
//! `vouch keys init` - Load a keypair from disk, generating it on first run.

use std::fs;
use std::path::PathBuf;
use vouch_jwt::Keypair;

/// Generate a new keypair.
pub fn generate(out_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let keypair = Keypair::generate();

    if let Some(out_dir) = out_dir {
        fs::create_dir_all(&out_dir)?;

        let private_path = out_dir.join("private.key");
        let public_path = out_dir.join("public.key");
        keypair.save_to_files(&private_path, &public_path)?;

        println!("✔ Generated keypair:");
        println!("  Private key: {}", private_path.display());
        println!("  Public key:  {}", public_path.display());
        println!();
        println!("Set as environment variables:");
        println!(
            "  export VOUCH_PRIVATE_KEY=$(cat {})",
            private_path.display()
        );
        println!(
            "  export VOUCH_PUBLIC_KEY=$(cat {})",
            public_path.display()
        );
    } else {
        println!("Private key (keep secure!):");
        println!("{}", keypair.seed_hex());
        println!();
        println!("Public key:");
        println!("{}", keypair.public_key_hex());
        println!();
        println!("Use --out-dir <dir> to save keys to files.");
    }

    Ok(())
}

/// Load the keypair from a directory, generating and saving it on first run.
pub fn init(dir: PathBuf) -> anyhow::Result<()> {
    fs::create_dir_all(&dir)?;

    let private_path = dir.join("private.key");
    let public_path = dir.join("public.key");
    let keypair = Keypair::load_or_generate(&private_path, &public_path)?;

    println!("✔ Keypair ready at {}", dir.display());
    println!("  Public key: {}", keypair.public_key_hex());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_keys_to_files() {
        let dir = tempdir().unwrap();
        generate(Some(dir.path().to_path_buf())).unwrap();

        assert!(dir.path().join("private.key").exists());
        assert!(dir.path().join("public.key").exists());

        let private_hex = fs::read_to_string(dir.path().join("private.key")).unwrap();
        let public_hex = fs::read_to_string(dir.path().join("public.key")).unwrap();

        // Hex keys should be 64 characters (32 bytes)
        assert_eq!(private_hex.len(), 64);
        assert_eq!(public_hex.len(), 64);
    }

    #[test]
    fn test_init_is_stable_across_runs() {
        let dir = tempdir().unwrap();

        init(dir.path().to_path_buf()).unwrap();
        let first = fs::read_to_string(dir.path().join("public.key")).unwrap();

        init(dir.path().to_path_buf()).unwrap();
        let second = fs::read_to_string(dir.path().join("public.key")).unwrap();

        assert_eq!(first, second);
    }
}
