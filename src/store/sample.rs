//! Deterministic in-memory sample dataset.
//!
//! The generated set mirrors the well-known fixture shape: 1000 folders at
//! the default size, 666 of them owned by [`DEFAULT_ORG_ID`], exactly one by
//! [`SOLO_ORG_ID`], and the remaining 333 spread over three filler
//! organizations. Ids, names and timestamps are derived from the record
//! index alone, so the dataset — and every continuation token minted from
//! it — is identical across runs and platforms.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::instrument;
use uuid::Uuid;

use crate::model::Folder;
use crate::store::FolderSource;

/// Organization owning 666 folders at the default dataset size.
pub const DEFAULT_ORG_ID: Uuid = Uuid::from_u128(0xc1556e17_b7c0_45a3_a6ae_9546248fb17a);

/// Organization owning exactly one folder at the default dataset size.
pub const SOLO_ORG_ID: Uuid = Uuid::from_u128(0x9727c9a2_52ec_4787_9d70_2125c0d77db4);

/// The organizations sharing the rest of the dataset.
pub const FILLER_ORG_IDS: [Uuid; 3] = [
    Uuid::from_u128(0x4be27b3c_9b65_4d61_a8e2_5f1c873ab004),
    Uuid::from_u128(0x11f5ead2_a7d4_4a5e_9a62_0b73d7fd6b2e),
    Uuid::from_u128(0x87f24b9a_e2cd_4507_b33d_4a4e3bd1ba34),
];

/// Default number of generated folders.
pub const DATASET_SIZE: usize = 1000;

// Index of the single folder assigned to SOLO_ORG_ID.
const SOLO_INDEX: usize = 15;

const ADJECTIVES: [&str; 23] = [
    "amber", "brisk", "calm", "dapper", "eager", "fuzzy", "gentle", "hollow", "ivory", "jolly",
    "keen", "lucid", "mellow", "noble", "opal", "proud", "quiet", "rustic", "silver", "tidy",
    "umber", "vivid", "wry",
];

const NOUNS: [&str; 22] = [
    "anchor", "beacon", "canyon", "drift", "ember", "fjord", "grove", "harbor", "islet", "jetty",
    "knoll", "lagoon", "meadow", "nimbus", "orchard", "prairie", "quarry", "ridge", "summit",
    "thicket", "valley", "willow",
];

/// An in-memory [`FolderSource`] over the generated dataset.
///
/// Records are held in generation order and `fetch_by_org` preserves that
/// order, which satisfies the trait's ordering requirement.
#[derive(Debug, Clone)]
pub struct SampleSource {
    folders: Vec<Folder>,
}

impl SampleSource {
    pub fn new() -> Self {
        Self::with_size(DATASET_SIZE)
    }

    /// Source over a dataset of `size` folders. The 666 / 1 / 333 counts
    /// only hold at [`DATASET_SIZE`]; other sizes keep the assignment
    /// pattern and scale the counts.
    pub fn with_size(size: usize) -> Self {
        Self {
            folders: generate(size),
        }
    }

    /// The full dataset in generation order, all organizations included.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FolderSource for SampleSource {
    #[instrument(skip_all)]
    async fn fetch_by_org(&self, org_id: Uuid) -> Result<Vec<Folder>> {
        Ok(self
            .folders
            .iter()
            .filter(|folder| folder.org_id == org_id)
            .cloned()
            .collect())
    }
}

fn generate(size: usize) -> Vec<Folder> {
    let epoch = base_timestamp();
    (0..size)
        .map(|index| Folder {
            id: folder_id(index),
            name: folder_name(index),
            org_id: org_for_index(index),
            deleted: index % 5 == 0,
            created_at: epoch + Duration::hours(index as i64),
        })
        .collect()
}

fn base_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 8, 1, 0, 0, 0)
        .single()
        .expect("valid sample epoch")
}

// Index 15 is the solo organization's only folder; every other multiple of
// three rotates through the filler organizations; everything else belongs to
// the default organization. Over 1000 indexes: 666 / 1 / 333.
fn org_for_index(index: usize) -> Uuid {
    if index == SOLO_INDEX {
        SOLO_ORG_ID
    } else if index % 3 == 0 {
        FILLER_ORG_IDS[(index / 3) % FILLER_ORG_IDS.len()]
    } else {
        DEFAULT_ORG_ID
    }
}

fn folder_name(index: usize) -> String {
    // 23 and 22 are coprime, so pairs only repeat every 506 records.
    format!(
        "{}-{}",
        ADJECTIVES[index % ADJECTIVES.len()],
        NOUNS[index % NOUNS.len()]
    )
}

fn folder_id(index: usize) -> Uuid {
    let hi = mix64(index as u64);
    let lo = mix64(!(index as u64));
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&hi.to_be_bytes());
    bytes[8..].copy_from_slice(&lo.to_be_bytes());
    // Stamps the version/variant bits so ids read as ordinary v4 UUIDs.
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

// splitmix64 finalizer; a bijection on u64, so distinct indexes can never
// produce the same high word.
fn mix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}
