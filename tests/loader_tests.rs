use skillscope::aggregator::{detail_for, top_skills};
use skillscope::loader::DatasetLoader;
use skillscope::parser::SkillFieldKind;
use skillscope::utils::error::LoadError;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn path_of(file: &NamedTempFile) -> String {
    file.path().to_str().unwrap().to_string()
}

#[test]
fn test_string_and_list_forms_count_alike() {
    // Header mixes case to exercise the case-insensitive column lookup
    let file = csv_file(
        "title,job_NER_Skills,cluster_label,location_cleaned\n\
         A,\"[\"\"Excel\"\", \"\"SQL\"\"]\",Finance,Kuala Lumpur\n\
         B,\"['SQL']\",Data,Penang\n",
    );
    let mut loader = DatasetLoader::default();
    let dataset = loader.load(&path_of(&file)).unwrap();

    assert_eq!(dataset.postings()[0].skills, vec!["Excel", "SQL"]);
    assert_eq!(dataset.postings()[0].skill_field, SkillFieldKind::Parsed);

    let ranking = top_skills(&dataset, 10);
    assert_eq!(ranking.entries[0].skill, "SQL");
    assert_eq!(ranking.entries[0].count, 2);
    assert_eq!(detail_for(&dataset, "SQL").total_count, 2);
}

#[test]
fn test_file_url_source() {
    let file = csv_file("ner_skill\n\"['Go']\"\n");
    let mut loader = DatasetLoader::default();
    let dataset = loader.load(&format!("file://{}", path_of(&file))).unwrap();
    assert_eq!(dataset.len(), 1);
}

#[test]
fn test_repeated_load_returns_same_dataset() {
    let file = csv_file("ner_skill\n\"['Go']\"\n");
    let source = path_of(&file);
    let mut loader = DatasetLoader::default();

    let first = loader.load(&source).unwrap();
    let second = loader.load(&source).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_malformed_rows_do_not_fail_load() {
    let file = csv_file(
        "ner_skill,cluster_label\n\
         \"['Go', \",Ops\n\
         plain text,Ops\n\
         \"['Go']\",Ops\n",
    );
    let mut loader = DatasetLoader::default();
    let dataset = loader.load(&path_of(&file)).unwrap();

    let stats = dataset.stats();
    assert_eq!(stats.malformed, 1);
    assert_eq!(stats.unstructured, 1);
    assert_eq!(stats.parsed, 1);
    assert_eq!(top_skills(&dataset, 10).entries[0].count, 1);
}

#[test]
fn test_missing_skills_column_is_data_unavailable() {
    let file = csv_file("title,cluster_label\nDev,Software\n");
    let mut loader = DatasetLoader::default();
    let err = loader.load(&path_of(&file)).unwrap_err();
    assert!(matches!(err, LoadError::DataUnavailable { .. }));
}

#[test]
fn test_header_only_dataset_is_empty() {
    let file = csv_file("ner_skill,cluster_label,location_cleaned\n");
    let mut loader = DatasetLoader::default();
    let dataset = loader.load(&path_of(&file)).unwrap();

    assert!(dataset.is_empty());
    assert!(top_skills(&dataset, 10).is_empty());
    assert_eq!(detail_for(&dataset, "Go").top_category, "N/A");
}
