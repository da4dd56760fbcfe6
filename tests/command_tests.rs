use skillscope::commands::{
    execute_detail, execute_overview, validate_report_file, DetailArgs, OverviewArgs, SourceArgs,
};
use skillscope::output::read_report;
use skillscope::parser::Report;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

const CSV: &str = "title,ner_skills,cluster_label,location_cleaned\n\
Analyst,\"['Python', 'SQL']\",Data,Kuala Lumpur\n\
Engineer,\"['Python']\",Software,Penang\n\
Developer,\"['Java']\",Software,Penang\n";

fn dataset_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CSV.as_bytes()).unwrap();
    file
}

fn source(file: &NamedTempFile) -> SourceArgs {
    SourceArgs {
        source: file.path().to_str().unwrap().to_string(),
        ..Default::default()
    }
}

#[test]
fn test_overview_writes_report_and_chart() {
    let file = dataset_file();
    let out = tempdir().unwrap();
    let json = out.path().join("reports/overview.json");
    let svg = out.path().join("charts/skills.svg");

    let args = OverviewArgs {
        source: source(&file),
        output_json: Some(json.clone()),
        output_svg: Some(svg.clone()),
        print_summary: false,
        ..Default::default()
    };
    let report = execute_overview(&args).unwrap();

    assert_eq!(report.total_postings, 3);
    assert_eq!(report.top_skills.entries[0].skill, "Python");

    let svg_text = std::fs::read_to_string(&svg).unwrap();
    assert!(svg_text.contains("<title>Python: 2</title>"));
    assert!(svg_text.contains("Top 3 High-Demand Skills"));

    match read_report(&json).unwrap() {
        Report::Overview(r) => {
            assert_eq!(r.skills_column, "ner_skills");
            assert_eq!(r.top_skills.len(), 3);
            assert_eq!(r.normalization.parsed, 3);
        }
        Report::Detail(_) => panic!("expected overview report"),
    }
    assert!(validate_report_file(&json).is_ok());
}

#[test]
fn test_detail_writes_report() {
    let file = dataset_file();
    let out = tempdir().unwrap();
    let json = out.path().join("python.json");
    let svg = out.path().join("python.svg");

    let args = DetailArgs {
        source: source(&file),
        skill: "Python".to_string(),
        output_json: Some(json.clone()),
        output_svg: Some(svg.clone()),
        print_summary: false,
        ..Default::default()
    };
    let report = execute_detail(&args).unwrap();

    assert_eq!(report.summary.total_count, 2);
    assert_eq!(report.summary.top_location, "Kuala Lumpur");
    assert!(std::fs::read_to_string(&svg)
        .unwrap()
        .contains("Top Sectors for Python"));

    match read_report(&json).unwrap() {
        Report::Detail(r) => assert_eq!(r.summary.skill, "Python"),
        Report::Overview(_) => panic!("expected detail report"),
    }
}

#[test]
fn test_detail_unknown_skill_skips_chart() {
    let file = dataset_file();
    let out = tempdir().unwrap();
    let svg = out.path().join("none.svg");

    let args = DetailArgs {
        source: source(&file),
        skill: "Cobol".to_string(),
        output_svg: Some(svg.clone()),
        print_summary: false,
        ..Default::default()
    };
    let report = execute_detail(&args).unwrap();

    assert_eq!(report.summary.total_count, 0);
    assert!(!svg.exists());
}

#[test]
fn test_overview_missing_source_fails() {
    let args = OverviewArgs {
        source: SourceArgs {
            source: "/no/such/jobs.csv".to_string(),
            ..Default::default()
        },
        print_summary: false,
        ..Default::default()
    };
    let err = execute_overview(&args).unwrap_err();
    assert!(format!("{:#}", err).contains("Dataset unavailable"));
}
