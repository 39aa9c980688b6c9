#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use abcheck::{checking, parsing};

    fn collect(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("abc")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .abc files found in {:?}", dir);
        files
    }

    #[test]
    fn ensure_samples_validate() {
        let mut failures = Vec::new();

        for file in collect(Path::new("tests/samples/")) {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let errors = checking::validate(&content);
            if !errors.is_empty() {
                println!("File {:?} failed to validate: {:?}", file, errors);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should validate cleanly, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let mut unexpected_successes = Vec::new();

        for file in collect(Path::new("tests/broken/")) {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            if checking::validate(&content).is_empty() {
                println!("File {:?} unexpectedly validated", file);
                unexpected_successes.push(file.clone());
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should not validate, but {} files passed",
                unexpected_successes.len()
            );
        }
    }

    #[test]
    fn ensure_lossless() {
        let mut files = collect(Path::new("tests/samples/"));
        files.extend(collect(Path::new("tests/broken/")));

        for file in files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let rejoined: String = parsing::classify(&content)
                .iter()
                .map(|span| span.text)
                .collect();

            assert_eq!(rejoined, content, "{:?} not reproduced", file);
        }
    }
}
