use anyhow::{Result, bail};
use std::io::{self, IsTerminal, Read};
use zeroize::Zeroizing;

/// Reads the master secret, trying in order:
///
/// environment variable
///   `PASSFORGE_SECRET="..." passforge generate example.com`
/// piped stdin
///   `printf '%s' "$SECRET" | passforge generate example.com`
/// interactive prompt (TTY, input hidden)
///
/// The secret is never echoed and never written anywhere; it lives only for
/// the duration of the invocation, zeroized on drop.
pub fn read_secret() -> Result<Zeroizing<String>> {
    if let Ok(secret) = std::env::var("PASSFORGE_SECRET") {
        if !secret.is_empty() {
            return Ok(Zeroizing::new(secret));
        }
    }

    if !io::stdin().is_terminal() {
        // Read the whole pipe so multi-line "keystroke entropy" input works
        // as a secret too; only trailing newlines are stripped.
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        trim_newline(&mut buf);

        if !buf.is_empty() {
            return Ok(buf);
        }
    }

    if io::stdin().is_terminal() {
        let secret = rpassword::prompt_password("Master secret: ")?;
        if !secret.is_empty() {
            return Ok(Zeroizing::new(secret));
        }
    }

    bail!("no master secret provided")
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
