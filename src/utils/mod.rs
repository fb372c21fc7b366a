pub mod environment;
pub mod paths;

pub use environment::{CLAUDE_DIR_ENV, get_claude_dir, resolve_claude_dir};
pub use paths::{
    decode_path, decode_project_path, encode_path, format_path_with_tilde,
    validate_path_not_symlink,
};
