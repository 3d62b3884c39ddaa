use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{exercise::Exercise, prelude::*, sheet::Sheet};

/// Whole batch as JSON, next to the sheets.
const BATCH_FILE_NAME: &str = "exercises.json";

/// Write the exercise and solution sheets of every exercise, and the batch itself.
///
/// Returns the written paths.
#[instrument(skip_all, fields(output_dir = %output_dir.display()))]
pub fn export(exercises: &[Exercise], output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create `{}`", output_dir.display()))?;

    let mut paths = Vec::with_capacity(2 * exercises.len() + 1);
    for exercise in exercises {
        for with_solution in [false, true] {
            let sheet = Sheet::builder()
                .exercise(exercise)
                .abacus(true)
                .solution(with_solution)
                .plain(true)
                .build();
            let path = output_dir.join(file_name(exercise, with_solution));
            write(&path, sheet.to_string())?;
            paths.push(path);
        }
    }

    let path = output_dir.join(BATCH_FILE_NAME);
    write(&path, serde_json::to_string_pretty(exercises)?)?;
    paths.push(path);

    info!(n_files = paths.len(), "exported");
    Ok(paths)
}

fn file_name(exercise: &Exercise, with_solution: bool) -> String {
    let prefix = if with_solution { "solution" } else { "exercise" };
    format!("{prefix}_{}_{}.txt", exercise.id, exercise.kind)
}

fn write(path: &Path, contents: String) -> Result {
    debug!(path = %path.display(), "writing…");
    fs::write(path, contents).with_context(|| format!("failed to write `{}`", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::tests::exercise;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(&exercise(), false), "exercise_1_length.txt");
        assert_eq!(file_name(&exercise(), true), "solution_1_length.txt");
    }

    #[test]
    fn test_export() {
        let output_dir = tempfile::tempdir().unwrap();
        let exercises = [exercise()];
        let paths = export(&exercises, output_dir.path()).unwrap();
        assert_eq!(paths.len(), 3);

        let exercise_sheet = fs::read_to_string(&paths[0]).unwrap();
        assert!(exercise_sheet.starts_with("Exercise 1: Convert 7 m to cm"));
        assert!(!exercise_sheet.contains("Solution"));

        let solution_sheet = fs::read_to_string(&paths[1]).unwrap();
        assert!(solution_sheet.ends_with("Solution: 700 cm\n"));
        assert!(!solution_sheet.contains('\u{1b}'));

        let batch: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&paths[2]).unwrap()).unwrap();
        assert_eq!(batch[0]["kind"], "length");
        assert_eq!(batch[0]["target_unit"], "cm");
        assert_eq!(batch[0]["solution"], 700.0);
    }

    #[test]
    fn test_export_into_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(export(&[exercise()], file.path()).is_err());
    }
}
