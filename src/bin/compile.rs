//! Compiles the campaign contracts with an external `solc` and writes one
//! JSON artifact per compiled contract to the build directory. On compiler
//! errors a single `Errors.txt` artifact is written instead.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde_json::{json, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source_path = PathBuf::from(
        std::env::var("CONTRACT_SOURCE").unwrap_or_else(|_| "contracts/Campaign.sol".to_string()),
    );
    let build_dir = PathBuf::from(
        std::env::var("CONTRACT_BUILD_DIR").unwrap_or_else(|_| "build".to_string()),
    );
    let solc = std::env::var("SOLC").unwrap_or_else(|_| "solc".to_string());

    // Start from a clean build directory
    if build_dir.exists() {
        fs::remove_dir_all(&build_dir)?;
    }
    fs::create_dir_all(&build_dir)?;

    let source = fs::read_to_string(&source_path)?;
    let source_name = source_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("Campaign.sol")
        .to_string();

    let mut sources = serde_json::Map::new();
    sources.insert(source_name.clone(), json!({ "content": source }));

    // Compile-everything output selection
    let input = json!({
        "language": "Solidity",
        "sources": sources,
        "settings": {
            "outputSelection": { "*": { "*": ["*"] } }
        }
    });

    println!("Compiling {}", source_path.display());
    let output = run_solc(&solc, &input)?;

    if let Some(errors) = output.get("errors").and_then(|e| e.as_array()) {
        if !errors.is_empty() {
            let messages: Vec<String> = errors
                .iter()
                .map(|err| {
                    err.get("formattedMessage")
                        .and_then(|m| m.as_str())
                        .unwrap_or("unknown compiler error")
                        .to_string()
                })
                .collect();

            for message in &messages {
                println!("{}", message);
            }

            // Write the error artifact instead of any contract artifacts
            fs::write(build_dir.join("Errors.txt"), messages.join("\n"))?;
            println!("Compiler errors written to {}", build_dir.join("Errors.txt").display());
            return Ok(());
        }
    }

    write_artifacts(&output, &source_name, &build_dir)?;

    Ok(())
}

fn run_solc(solc: &str, input: &Value) -> Result<Value, Box<dyn std::error::Error>> {
    let mut child = Command::new(solc)
        .arg("--standard-json")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child
        .stdin
        .as_mut()
        .ok_or("failed to open solc stdin")?
        .write_all(serde_json::to_string(input)?.as_bytes())?;

    let result = child.wait_with_output()?;
    if !result.status.success() {
        return Err(format!(
            "solc exited with {}: {}",
            result.status,
            String::from_utf8_lossy(&result.stderr)
        )
        .into());
    }

    Ok(serde_json::from_slice(&result.stdout)?)
}

fn write_artifacts(
    output: &Value,
    source_name: &str,
    build_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let contracts = output
        .get("contracts")
        .and_then(|c| c.get(source_name))
        .and_then(|c| c.as_object())
        .ok_or("no compiled contracts in solc output")?;

    for (contract_name, contract) in contracts {
        let artifact_path = build_dir.join(format!("{}.json", contract_name));
        fs::write(&artifact_path, serde_json::to_string_pretty(contract)?)?;
        println!("Wrote artifact: {}", artifact_path.display());
    }

    Ok(())
}
