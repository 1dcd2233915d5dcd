#![allow(dead_code)]

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

/// Relative paths of every file below `root`, sorted.
pub fn files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

/// Both framework variants side by side, as the boilerplate ships them.
pub fn write_variant_files(root: &Path) {
    write(root, "package.json.react", r#"{"name": "react-build"}"#);
    write(root, "package.json.vue", r#"{"name": "vue-build"}"#);
    write(root, "src-react/index.js", "// react entry\n");
    write(root, "src-vue/main.js", "// vue entry\n");
    write(root, "vite.config.js", "// vite\n");
    write(root, "webpack.config.js", "// webpack\n");
    write(root, "includes/Admin/Menu.react.php", "<?php // react menu\n");
    write(root, "includes/Admin/Menu.vue.php", "<?php // vue menu\n");
    write(root, "includes/Assets/LoadAssets-react.php", "<?php // react assets\n");
    write(root, "includes/Assets/LoadAssets-vue.php", "<?php // vue assets\n");
    write(root, "includes/Assets/Vite.php", "<?php // vite helper\n");
}
