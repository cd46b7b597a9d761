use crate::ci::Environment;
use crate::error::{Error, Result};
use crate::slsa;
use crate::subject;

use super::commands::GenerateArgs;
use log::debug;
use std::fs;

pub fn handle_generate_command(args: GenerateArgs) -> Result<()> {
    let subject = subject::subject_from_inputs(
        args.subject_path.as_deref(),
        args.subject_digest.as_deref(),
        args.subject_name.as_deref(),
    )?;
    debug!(
        "Generating provenance for {} with digest {:?}",
        subject.name, subject.digest
    );

    let environment = Environment::from_process();
    let provenance = slsa::generate_provenance(subject, &environment)?;

    let rendered = serde_json::to_string_pretty(&provenance)
        .map_err(|e| Error::Serialization(e.to_string()))?;

    match args.output_file {
        Some(path) => {
            debug!("Writing provenance to {}", path.display());
            fs::write(&path, rendered)?;
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
