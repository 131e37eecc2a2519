//! Handler for `depviz tree`.

use std::path::PathBuf;

use miette::Result;

use depviz_ops::ops_tree::{self, TreeOptions};
use depviz_util::errors::DepvizError;

pub async fn exec(
    file: PathBuf,
    depth: Option<usize>,
    why: Option<String>,
    index_url: Option<String>,
) -> Result<()> {
    if !file.is_file() {
        return Err(DepvizError::Manifest {
            message: format!("Requirements file '{}' does not exist", file.display()),
        }
        .into());
    }

    let opts = TreeOptions {
        file,
        depth,
        why,
        index_url,
    };
    ops_tree::tree(&opts).await
}
