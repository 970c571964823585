use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

pub fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut contents = Vec::new();
            io::stdin().lock().read_to_end(&mut contents)?;
            Ok(contents)
        }
    }
}

pub fn write_output(path: Option<&Path>, contents: &[u8]) -> io::Result<()> {
    match path {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            fs::write(path, contents)
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents)?;
            stdout.flush()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_macro::path;
    use rand::random;

    #[test]
    fn test_file_round_trip() {
        let id: u128 = random();
        let tmp = std::env::temp_dir();
        let dir = path!(tmp / format!("blockpad-{id}"));
        let file = path!(dir / "nested" / "data.bin");

        let contents: Vec<u8> = (0..300).map(|_| random()).collect();
        write_output(Some(file.as_path()), &contents).unwrap();
        assert_eq!(read_input(Some(file.as_path())).unwrap(), contents);

        fs::remove_dir_all(dir).unwrap_or_default();
    }

    #[test]
    fn test_missing_input() {
        let id: u128 = random();
        let tmp = std::env::temp_dir();
        let file = path!(tmp / format!("blockpad-missing-{id}"));
        assert!(read_input(Some(file.as_path())).is_err());
    }
}
