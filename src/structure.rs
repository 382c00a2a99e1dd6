//! Structure catalog and RCSB download path.
//!
//! The viewer treats structure payloads as opaque text handed to the 3D
//! renderer. Fetch failures surface as
//! [`SynviewError::StructureFetch`] and never touch the scoring or
//! rendering paths.

#[cfg(feature = "fetch")]
use std::path::{Path, PathBuf};

#[cfg(feature = "fetch")]
use crate::error::SynviewError;

/// Directory where downloaded structures are cached.
#[cfg(feature = "fetch")]
const MODELS_DIR: &str = "assets/models";

/// An α-synuclein structure available in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureEntry {
    /// 4-character PDB identifier.
    pub pdb_id: &'static str,
    /// Human-readable label for the structure picker.
    pub label: &'static str,
}

/// Structures offered by the viewer's structure picker.
pub const STRUCTURES: [StructureEntry; 3] = [
    StructureEntry {
        pdb_id: "1XQ8",
        label: "α-Synuclein Fibril",
    },
    StructureEntry {
        pdb_id: "6H6B",
        label: "α-Synuclein Monomer",
    },
    StructureEntry {
        pdb_id: "6CU7",
        label: "α-Synuclein in Membrane",
    },
];

/// Whether `input` has the shape of a PDB identifier.
#[must_use]
pub fn is_pdb_id(input: &str) -> bool {
    input.len() == 4 && input.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Resolve `input` to a local structure file, downloading from RCSB on a
/// cache miss.
///
/// Accepts either a filesystem path to an existing file or a 4-character
/// PDB id. Downloads land in `assets/models/<id>.pdb` and are reused on
/// subsequent runs.
///
/// # Errors
///
/// [`SynviewError::StructureFetch`] when the input is neither an existing
/// file nor a valid PDB id, or when the download fails;
/// [`SynviewError::Io`] when the cache directory or file cannot be
/// written.
#[cfg(feature = "fetch")]
pub fn resolve_structure_path(input: &str) -> Result<PathBuf, SynviewError> {
    if Path::new(input).exists() {
        return Ok(PathBuf::from(input));
    }

    if !is_pdb_id(input) {
        return Err(SynviewError::StructureFetch(format!(
            "not an existing file or a valid PDB id: {input}"
        )));
    }

    let pdb_id = input.to_lowercase();
    let models_dir = Path::new(MODELS_DIR);
    let local_path = models_dir.join(format!("{pdb_id}.pdb"));

    if local_path.exists() {
        return Ok(local_path);
    }

    if !models_dir.exists() {
        std::fs::create_dir_all(models_dir)?;
    }

    let content = fetch_pdb(&pdb_id)?;
    std::fs::write(&local_path, &content)?;

    log::info!("downloaded to {}", local_path.display());
    Ok(local_path)
}

/// Download a structure in PDB format from RCSB.
///
/// # Errors
///
/// [`SynviewError::StructureFetch`] on any transport or read failure
/// (timeout, not-found, malformed payload).
#[cfg(feature = "fetch")]
pub fn fetch_pdb(pdb_id: &str) -> Result<String, SynviewError> {
    let url = format!("https://files.rcsb.org/download/{pdb_id}.pdb");
    log::info!("downloading {} from RCSB...", pdb_id.to_uppercase());

    ureq::get(&url)
        .call()
        .map_err(|e| {
            SynviewError::StructureFetch(format!(
                "failed to download {pdb_id}: {e}"
            ))
        })?
        .into_body()
        .read_to_string()
        .map_err(|e| {
            SynviewError::StructureFetch(format!(
                "failed to read response for {pdb_id}: {e}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::{is_pdb_id, STRUCTURES};

    #[test]
    fn catalog_ids_are_well_formed() {
        for entry in &STRUCTURES {
            assert!(is_pdb_id(entry.pdb_id), "{}", entry.pdb_id);
        }
    }

    #[test]
    fn pdb_id_shape() {
        assert!(is_pdb_id("1XQ8"));
        assert!(is_pdb_id("6h6b"));
        assert!(!is_pdb_id("XQ8"));
        assert!(!is_pdb_id("1XQ88"));
        assert!(!is_pdb_id("1XQ_"));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn invalid_input_is_a_fetch_error() {
        use crate::error::SynviewError;
        let err = super::resolve_structure_path("not/a/real/file.pdb")
            .unwrap_err();
        assert!(matches!(err, SynviewError::StructureFetch(_)));
    }
}
