use accent_etl::{
    AccentPipeline, EtlEngine, EtlError, ErrorMode, LocalStorage, RunConfig,
};
use anyhow::Result;
use std::collections::HashSet;
use tempfile::TempDir;

const DICTIONARY: &str = "\
日本語\tにほんご\t0
何\tなに\t(名)2,(代)0,2
ありがとう\t\t2
生\tなま\t1
生\tせい\t1
一\tいち\t(名;代)2,(副)1,2
";

fn write_input(dir: &TempDir, content: &str) -> Result<()> {
    std::fs::write(dir.path().join("accents.txt"), content)?;
    Ok(())
}

fn groups(encoded: &str) -> (String, HashSet<String>) {
    let (reading, groups) = encoded.split_once(':').expect("reading separator");
    (
        reading.to_string(),
        groups.split('|').map(str::to_string).collect(),
    )
}

#[tokio::test]
async fn test_end_to_end_index_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_input(&temp_dir, DICTIONARY)?;

    let storage = LocalStorage::new(temp_dir.path());
    let config = RunConfig::new("accents.txt").with_output_path("out/accents.json");
    let engine = EtlEngine::new(AccentPipeline::new(storage, config));

    let report = engine.run().await?;
    assert_eq!(report.destination, "out/accents.json");
    assert_eq!(report.stats.entries_indexed, 6);
    assert_eq!(report.stats.vocab_count, 5);

    let written = std::fs::read_to_string(temp_dir.path().join("out/accents.json"))?;
    assert!(!written.contains('\n'), "output must be compact");

    let json: serde_json::Value = serde_json::from_str(&written)?;
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 5);

    assert_eq!(json["日本語"], serde_json::json!(["にほんご:;0"]));
    assert_eq!(json["ありがとう"], serde_json::json!(["ありがとう:;2"]));
    assert_eq!(json["生"], serde_json::json!(["なま:;1", "せい:;1"]));

    let (reading, nani) = groups(json["何"][0].as_str().unwrap());
    assert_eq!(reading, "なに");
    assert_eq!(
        nani,
        HashSet::from(["名;2".to_string(), "代;0,2".to_string()])
    );

    let (_, ichi) = groups(json["一"][0].as_str().unwrap());
    assert_eq!(
        ichi,
        HashSet::from(["名,代;2".to_string(), "副;1,2".to_string()])
    );

    Ok(())
}

#[test]
fn test_malformed_line_produces_no_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_input(&temp_dir, "日本語\tにほんご\t0\n日本\t0\n")?;

    let storage = LocalStorage::new(temp_dir.path());
    let config = RunConfig::new("accents.txt").with_output_path("accents.json");
    let engine = EtlEngine::new(AccentPipeline::new(storage, config));

    let err = tokio_test::block_on(engine.run()).unwrap_err();
    assert!(matches!(err, EtlError::ParseError { line_number: 2, .. }));
    assert!(!temp_dir.path().join("accents.json").exists());
    Ok(())
}

#[tokio::test]
async fn test_skip_mode_indexes_remaining_lines() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_input(&temp_dir, "名前\tなまえ\t(名)x\n橋\tはし\t2\n")?;

    let storage = LocalStorage::new(temp_dir.path());
    let config = RunConfig::new("accents.txt")
        .with_output_path("accents.json")
        .with_error_mode(ErrorMode::Skip);
    let report = EtlEngine::new(AccentPipeline::new(storage, config)).run().await?;
    assert_eq!(report.stats.lines_skipped, 1);

    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join("accents.json"))?)?;
    assert_eq!(json, serde_json::json!({"橋": ["はし:;2"]}));
    Ok(())
}

#[tokio::test]
async fn test_skip_mode_survives_invalid_utf8_line() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = [
        "橋\tはし\t2\n".as_bytes(),
        &b"\xff\xfe\t\t1\n"[..],
        "箸\tはし\t1\n".as_bytes(),
    ]
    .concat();
    std::fs::write(temp_dir.path().join("accents.txt"), input)?;

    let storage = LocalStorage::new(temp_dir.path());
    let config = RunConfig::new("accents.txt")
        .with_output_path("accents.json")
        .with_error_mode(ErrorMode::Skip);
    let report = EtlEngine::new(AccentPipeline::new(storage, config)).run().await?;
    assert_eq!(report.stats.lines_read, 3);
    assert_eq!(report.stats.lines_skipped, 1);

    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join("accents.json"))?)?;
    assert_eq!(
        json,
        serde_json::json!({"橋": ["はし:;2"], "箸": ["はし:;1"]})
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_input_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path());
    let engine = EtlEngine::new(AccentPipeline::new(storage, RunConfig::default()));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, EtlError::IoError(_)));
    assert_ne!(err.exit_code(), 0);
    Ok(())
}
