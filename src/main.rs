mod password;

use std::env;
use std::process;

use password::{hash_password, verify_password, PasswordError};

#[derive(Debug, PartialEq)]
enum Mode {
    Hash { password: Option<String> },
    Verify { password: String, hash: Option<String> },
}

// `--verify` only switches modes when a password follows it; a bare
// `--verify` is treated as a password to hash like any other positional
// argument.
fn classify(args: &[String]) -> Mode {
    if args.len() > 1 && args[0] == "--verify" {
        Mode::Verify {
            password: args[1].clone(),
            hash: args.get(2).cloned(),
        }
    } else {
        Mode::Hash {
            password: args.first().cloned(),
        }
    }
}

fn separator() -> String {
    "─".repeat(80)
}

fn run_hash(password: &str) {
    println!("Hashing password...");
    let hash = match hash_password(password) {
        Ok(hash) => hash,
        Err(PasswordError::EmptyPassword) => {
            eprintln!("Password must not be empty.");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to hash password: {}", e);
            process::exit(1);
        }
    };

    println!("\nPassword hash:");
    println!("{}", separator());
    println!("{}", hash);
    println!("{}", separator());

    // Sanity check: the hash we just printed must verify against its own
    // password. A failure here is reported but not fatal.
    println!("\nChecking hash...");
    match verify_password(password, &hash) {
        Ok(true) => println!("✓ Hash verified against the password"),
        _ => println!("✗ Self-check failed: hash does not match the password"),
    }

    println!("\nCopy the full hash above for use in the database.");
    println!("Make sure to copy the whole string with no stray whitespace.");
}

fn print_mismatch_hints(hash: &str) {
    let trimmed = hash.trim();
    let prefix: String = trimmed.chars().take(7).collect();
    println!();
    println!("Hash length: {}", trimmed.len());
    println!("Hash prefix: {}", prefix);
    println!("A bcrypt hash is 60 characters and starts with `$2`; check for");
    println!("truncation or stray whitespace if this one does not.");
}

fn run_verify(password: &str, hash: &str) {
    println!("Checking hash against password...");
    println!("\n{}", separator());
    match verify_password(password, hash) {
        Ok(true) => println!("✓ Hash matches the password"),
        Ok(false) => {
            println!("✗ Hash does NOT match the password");
            print_mismatch_hints(hash);
        }
        Err(PasswordError::MalformedHash) => {
            println!("✗ Not a valid bcrypt hash; treated as no match");
            print_mismatch_hints(hash);
        }
        Err(e) => println!("✗ Verification failed: {}", e),
    }
    println!("{}", separator());
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match classify(&args) {
        Mode::Verify { password, hash } => {
            let Some(hash) = hash else {
                eprintln!("Usage: hash-password --verify <password> <hash>");
                process::exit(1);
            };
            run_verify(&password, &hash);
        }
        Mode::Hash { password } => {
            let password = match password {
                Some(password) => password,
                None => match rpassword::prompt_password("Enter password to hash: ") {
                    Ok(password) => password,
                    Err(e) => {
                        eprintln!("Failed to read password: {}", e);
                        process::exit(1);
                    }
                },
            };
            run_hash(&password);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn both_verify_arguments_enter_verify_mode() {
        assert_eq!(
            classify(&args(&["--verify", "hunter2", "$2b$10$abc"])),
            Mode::Verify {
                password: "hunter2".to_string(),
                hash: Some("$2b$10$abc".to_string()),
            }
        );
    }

    #[test]
    fn missing_hash_is_still_verify_mode() {
        assert_eq!(
            classify(&args(&["--verify", "hunter2"])),
            Mode::Verify {
                password: "hunter2".to_string(),
                hash: None,
            }
        );
    }

    #[test]
    fn bare_verify_flag_is_hashed_as_a_password() {
        assert_eq!(
            classify(&args(&["--verify"])),
            Mode::Hash {
                password: Some("--verify".to_string()),
            }
        );
    }

    #[test]
    fn no_arguments_means_interactive_hash_mode() {
        assert_eq!(classify(&[]), Mode::Hash { password: None });
    }

    #[test]
    fn positional_password_enters_hash_mode() {
        assert_eq!(
            classify(&args(&["hunter2"])),
            Mode::Hash {
                password: Some("hunter2".to_string()),
            }
        );
    }
}
