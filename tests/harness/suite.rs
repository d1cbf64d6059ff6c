use super::for_each_test_file;
use serde_derive::Deserialize;
use serde_json::from_reader;

#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub description: String,
    pub input: String,
    pub output: String,
}

#[derive(Deserialize)]
struct TestFile {
    tests: Vec<TestCase>,
}

pub fn get_test_cases(suite: &'static str) -> Vec<TestCase> {
    let mut test_cases = Vec::new();

    for_each_test_file(&format!("{suite}.json"), &mut |file| {
        test_cases.extend(from_reader::<_, TestFile>(file).unwrap().tests);
    });

    assert!(!test_cases.is_empty(), "No test cases found in `{suite}`");

    test_cases
}
