//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique and null-terminated
//! 3. All domains follow the `NPUZZLE::*::V1\0` naming convention
//! 4. Board fingerprints are plain SHA-256 over `domain || LE u16 tiles`,
//!    recomputed here without the kernel's hashing code
//! 5. No raw `NPUZZLE::` domain literals in production source outside `hash_domain.rs`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use npuzzle_kernel::proof::hash_domain::HashDomain;
use npuzzle_kernel::puzzle::board::Board;
use npuzzle_kernel::puzzle::topology::BoardTopology;
use sha2::{Digest, Sha256};

// ---------------------------------------------------------------------------
// 1. Canonical set count
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        2,
        "expected 2 domain variants; if you added a new domain, update this count"
    );
}

// ---------------------------------------------------------------------------
// 2. Unique, null-terminated
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_bytes_unique_and_terminated() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
        assert!(
            domain.as_bytes().ends_with(&[0]),
            "{domain} is not null-terminated"
        );
    }
}

// ---------------------------------------------------------------------------
// 3. Naming convention
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(
            bytes.starts_with(b"NPUZZLE::"),
            "{domain} does not start with NPUZZLE::"
        );
        assert!(
            bytes.ends_with(b"::V1\0"),
            "{domain} does not end with ::V1\\0"
        );
    }
}

// ---------------------------------------------------------------------------
// 4. Independent fingerprint recomputation
// ---------------------------------------------------------------------------

#[test]
fn board_fingerprint_matches_independent_sha256() {
    let topology = BoardTopology::new(3).unwrap();
    let tiles: Vec<u16> = vec![1, 2, 5, 3, 4, 0, 6, 7, 8];
    let board = Board::new(tiles.clone(), &topology).unwrap();

    let mut hasher = Sha256::new();
    hasher.update(b"NPUZZLE::BOARD_IDENTITY::V1\0");
    for tile in &tiles {
        hasher.update(tile.to_le_bytes());
    }
    let expected = hex::encode(hasher.finalize());

    assert_eq!(board.fingerprint().to_hex(), expected);
    assert_eq!(
        board.fingerprint().to_prefixed(),
        format!("sha256:{expected}")
    );
}

#[test]
fn fingerprint_distinguishes_boards_sharing_a_multiset() {
    let topology = BoardTopology::new(2).unwrap();
    let a = Board::new(vec![1, 0, 2, 3], &topology).unwrap();
    let b = Board::new(vec![0, 1, 2, 3], &topology).unwrap();
    assert_ne!(a.fingerprint(), b.fingerprint());
}

// ---------------------------------------------------------------------------
// 5. No raw NPUZZLE:: domain literals in production source
// ---------------------------------------------------------------------------

#[test]
fn no_raw_domain_literals_outside_authority() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let pattern = "b\"NPUZZLE::";
    let authority_file = "hash_domain.rs";
    let mut violations = Vec::new();

    for crate_dir in ["kernel/src", "search/src", "harness/src"] {
        let dir = root.join(crate_dir);
        assert!(dir.is_dir(), "missing source dir {}", dir.display());
        for path in rust_files(&dir) {
            if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
                continue;
            }
            let content = std::fs::read_to_string(&path).unwrap();
            for (line_no, line) in content.lines().enumerate() {
                if line.contains(pattern) {
                    violations.push(format!("{}:{}", path.display(), line_no + 1));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "raw NPUZZLE:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}
