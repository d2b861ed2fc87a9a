use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Expose the nearest git tag for the version label in the header.
    // Absent git (or a tag), the crate version is used instead.
    let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
    else {
        return;
    };

    if !output.status.success() {
        return;
    }

    if let Ok(tag) = String::from_utf8(output.stdout) {
        let tag = tag.trim();
        if !tag.is_empty() {
            println!("cargo:rustc-env=GIT_TAG={tag}");
        }
    }
}
