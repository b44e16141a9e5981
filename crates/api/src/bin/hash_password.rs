//! Print an Argon2id hash for `ADMIN_PASSWORD_HASH`.
//!
//! ```text
//! cargo run -p tailwag-api --bin hash-password -- '<password>'
//! ```

use tailwag_api::auth::password::hash_password;

fn main() {
    let password = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: hash-password <PASSWORD>");
        std::process::exit(1);
    });

    match hash_password(&password) {
        Ok(hashed) => {
            println!("# Paste this into your .env (single quotes keep the `$` intact):");
            println!("ADMIN_PASSWORD_HASH='{hashed}'");
        }
        Err(e) => {
            eprintln!("Error hashing password: {e}");
            std::process::exit(1);
        }
    }
}
