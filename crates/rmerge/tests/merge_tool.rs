// dependencies
use std::fs;
use std::io::Write;
use std::path::Path;
use flate2::{Compression, write::GzEncoder};
use rmerge::{InputFile, JoinType};
use rmerge::workflow::Config;
use rmerge::tools::merge::{self, Merge, OutputFormat};

fn config(by: &str, output: &str, format: &str) -> Config {
    let mut cfg = Config::new();
    cfg.set_string("RMERGE_BY",         by.to_string());
    cfg.set_string("RMERGE_SEP",        ",".to_string());
    cfg.set_u8("RMERGE_SORT",           0);
    cfg.set_string("RMERGE_NA_MATCHES", "na".to_string());
    cfg.set_string("RMERGE_SUFFIX_X",   ".x".to_string());
    cfg.set_string("RMERGE_SUFFIX_Y",   ".y".to_string());
    cfg.set_string("RMERGE_OUTPUT",     output.to_string());
    cfg.set_string("RMERGE_FORMAT",     format.to_string());
    cfg
}
fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
fn write_gz(path: &Path, text: &str) {
    let mut gz = GzEncoder::new(fs::File::create(path).unwrap(), Compression::default());
    gz.write_all(text.as_bytes()).unwrap();
    gz.finish().unwrap();
}

#[test]
fn merge_tool_joins_csv_and_gzipped_tables() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv.gz");
    let out = dir.path().join("out.csv");
    fs::write(&a, "id,v\n1,x\n2,y\n").unwrap();
    write_gz(&b, "id,w\n2,z\n3,q\n");

    let cfg = config("id", &path_str(&out), "csv");
    let tool = Merge::from_config(&cfg, JoinType::Left).unwrap();
    let mut w = merge::workflow(JoinType::Left);
    let df = tool.run(&mut w, &[path_str(&a), path_str(&b)]).unwrap();
    tool.write(&df).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "id,v,w\n1,x,NA\n2,y,z\n");
    assert_eq!(w.ctrs.get("N_TABLES"), 2);
    assert_eq!(w.ctrs.get("N_ROWS_IN"), 4);
    assert_eq!(w.ctrs.get("N_ROWS_OUT"), 2);
}

#[test]
fn merge_tool_folds_globbed_tables_into_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("t1.csv"), "id,name\n1,ann\n2,bo\n3,cy\n").unwrap();
    fs::write(dir.path().join("t2.csv"), "key,score\n3,1.5\n1,2.5\n").unwrap();
    fs::write(dir.path().join("t3.csv"), "id,score\n1,9\n").unwrap();
    let out = dir.path().join("out.json");

    let inputs = merge::expand_inputs(&[path_str(&dir.path().join("t*.csv"))]).unwrap();
    assert_eq!(inputs.len(), 3);
    assert!(inputs[0].ends_with("t1.csv") && inputs[2].ends_with("t3.csv"));

    // t3 joins on id, but t2 names its key column differently
    let mut cfg = config("id", &path_str(&out), "json");
    cfg.set_string("RMERGE_BY", "id=key".to_string());
    let tool = Merge::from_config(&cfg, JoinType::Inner).unwrap();
    assert_eq!(tool.format, OutputFormat::Json);
    let mut w = merge::workflow(JoinType::Inner);
    let df12 = tool.run(&mut w, &inputs[..2]).unwrap();
    assert_eq!(df12.col_names(), &vec!["id", "name", "score"]);

    let mut cfg = config("id", &path_str(&out), "json");
    cfg.set_u8("RMERGE_SORT", 1);
    let tool = Merge::from_config(&cfg, JoinType::Full).unwrap();
    let df = tool.join.execute_join(&[&df12, &merge::read_table(&inputs[2], b',').unwrap()]).unwrap();
    tool.write(&df).unwrap();

    let df2 = InputFile::open(&path_str(&out)).unwrap().read_json().unwrap();
    assert_eq!(df2, df);
    assert_eq!(df2.col_names(), &vec!["id", "name", "score.x", "score.y"]);
    assert_eq!(df2.get_ref::<i32>("id").unwrap(), &vec![Some(1), Some(3)]);
    assert_eq!(df2.get_ref::<i32>("score.y").unwrap(), &vec![Some(9), None]);
}

#[test]
fn merge_tool_joins_an_empty_key_column_to_typed_keys() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");
    fs::write(&a, "id,v\nNA,x\n,y\n").unwrap();
    fs::write(&b, "id,w\n2,z\n").unwrap();
    let tool = Merge::from_config(&config("id", "-", "csv"), JoinType::Full).unwrap();
    let mut w = merge::workflow(JoinType::Full);
    let df = tool.run(&mut w, &[path_str(&a), path_str(&b)]).unwrap();
    assert_eq!(df.get_ref::<i32>("id").unwrap(), &vec![None, None, Some(2)]);
}

#[test]
fn merge_tool_rejects_bad_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.csv");
    fs::write(&a, "id,v\n1,x\n").unwrap();
    let tool = Merge::from_config(&config("id", "-", "csv"), JoinType::Semi).unwrap();
    let mut w = merge::workflow(JoinType::Semi);

    // a single table has nothing to join to
    assert!(tool.run(&mut w, &[path_str(&a)]).is_err());
    // missing files and unmatched patterns are errors
    assert!(tool.run(&mut w, &[path_str(&a), path_str(&dir.path().join("b.csv"))]).is_err());
    assert!(merge::expand_inputs(&[path_str(&dir.path().join("*.tsv"))]).is_err());
    // unknown key columns
    let tool = Merge::from_config(&config("nope", "-", "csv"), JoinType::Semi).unwrap();
    assert!(tool.run(&mut w, &[path_str(&a), path_str(&a)]).is_err());
    // malformed configuration
    assert!(Merge::from_config(&config("id,", "-", "csv"), JoinType::Semi).is_err());
    assert!(Merge::from_config(&config("id", "-", "xml"), JoinType::Semi).is_err());
}
