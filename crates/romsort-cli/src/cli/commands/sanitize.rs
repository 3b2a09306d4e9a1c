//! `romsort sanitize <name>` – print the filesystem-safe form of a name.

use romsort_core::sanitize::clean_file_name;

pub fn run_sanitize(name: &str) {
    println!("{}", clean_file_name(name));
}
