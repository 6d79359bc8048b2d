//! Integration tests for registry extraction from cp932 files.

use std::io::Write;

use encoding_rs::SHIFT_JIS;
use tempfile::NamedTempFile;

use placedic_ingest::{SourceKind, extract_addresses, extract_businesses, extract_source};
use placedic_model::{CandidateEntry, CombinationMode, EntrySet, PipelineOptions};

fn cp932_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let (bytes, _, unmappable) = SHIFT_JIS.encode(content);
    assert!(!unmappable, "fixture must be representable in cp932");
    file.write_all(&bytes).unwrap();
    file
}

const KEN_ALL: &str = "\
13101,\"100  \",\"1000000\",\"ﾄｳｷｮｳﾄ\",\"ﾁﾖﾀﾞｸ\",\"ｲｶﾆｹｲｻｲｶﾞﾅｲﾊﾞｱｲ\",\"東京都\",\"千代田区\",\"以下に掲載がない場合\",0,0,0,0,0,0
13101,\"102  \",\"1020082\",\"トウキョウト\",\"チヨダク\",\"チヨダ\",\"東京都\",\"千代田区\",\"千代田\",0,0,0,0,0,0
13101,\"100  \",\"1000005\",\"ﾄｳｷｮｳﾄ\",\"ﾁﾖﾀﾞｸ\",\"ﾏﾙﾉｳﾁ(ﾂｷﾞﾉﾋﾞﾙｦﾉｿﾞｸ)\",\"東京都\",\"千代田区\",\"丸の内（次のビルを除く）\",0,0,1,0,0,0
footer
";

#[test]
fn address_scenario_full_and_partial() {
    let file = cp932_file(KEN_ALL);
    let options = PipelineOptions::default().with_combinations(CombinationMode::CityTown);
    let mut entries = EntrySet::new();

    let stats = extract_addresses(file.path(), &options, &mut entries).unwrap();

    assert_eq!(stats.rows, 4);
    assert_eq!(stats.short_rows, 1);
    assert_eq!(stats.filtered_rows, 1);
    assert!(entries.contains(&CandidateEntry::new(
        "トウキョウトチヨダクチヨダ",
        "東京都千代田区千代田"
    )));
    assert!(entries.contains(&CandidateEntry::new("チヨダクチヨダ", "千代田区千代田")));
    assert!(entries.contains(&CandidateEntry::new(
        "ﾄｳｷｮｳﾄﾁﾖﾀﾞｸﾏﾙﾉｳﾁ",
        "東京都千代田区丸の内"
    )));
    assert_eq!(entries.len(), 4);
}

#[test]
fn address_hierarchical_emits_upper_levels_of_placeholder_rows() {
    let file = cp932_file(KEN_ALL);
    let mut entries = EntrySet::new();

    extract_addresses(file.path(), &PipelineOptions::default(), &mut entries).unwrap();

    assert!(entries.contains(&CandidateEntry::new("ﾄｳｷｮｳﾄﾁﾖﾀﾞｸ", "東京都千代田区")));
    assert!(entries.contains(&CandidateEntry::new("トウキョウト", "東京都")));
}

#[test]
fn business_scenario_and_short_rows() {
    let file = cp932_file(
        "id,\"カブシキガイシャエービーシー\",\"株式会社ABC\"\n\
         a,b\n",
    );
    let mut entries = EntrySet::new();

    let stats = extract_businesses(file.path(), &PipelineOptions::default(), &mut entries)
        .unwrap();

    assert_eq!(stats.short_rows, 1);
    assert_eq!(
        entries.iter().cloned().collect::<Vec<_>>(),
        vec![CandidateEntry::new("カブシキガイシャエービーシー", "株式会社ABC")]
    );
}

#[test]
fn both_sources_share_one_set() {
    let address = cp932_file(KEN_ALL);
    let business = cp932_file("1,\"チヨダ\",\"千代田\"\n");
    let options = PipelineOptions::default();
    let mut entries = EntrySet::new();

    extract_source(SourceKind::Address, address.path(), &options, &mut entries).unwrap();
    let before = entries.len();
    let stats =
        extract_source(SourceKind::Business, business.path(), &options, &mut entries).unwrap();

    assert_eq!(stats.candidates, 1);
    assert_eq!(stats.new_entries, 0);
    assert_eq!(entries.len(), before);
}

#[test]
fn undecodable_bytes_do_not_abort() {
    let mut bytes = SHIFT_JIS
        .encode("1,\"チヨダ\",\"千代田\"\n2,\"")
        .0
        .into_owned();
    bytes.extend_from_slice(&[0x81, 0x20]);
    bytes.extend_from_slice(&SHIFT_JIS.encode("\",\"銀座\"\n").0);
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();

    let mut entries = EntrySet::new();
    let stats = extract_businesses(file.path(), &PipelineOptions::default(), &mut entries)
        .unwrap();

    assert_eq!(stats.replaced_chars, 1);
    assert_eq!(stats.rows, 2);
    assert!(stats.completed);
    assert!(entries.contains(&CandidateEntry::new("チヨダ", "千代田")));
    assert!(entries.contains(&CandidateEntry::new("\u{fffd}", "銀座")));
}
