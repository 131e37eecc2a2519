//! Handler for `depviz render`.

use std::path::PathBuf;

use miette::Result;

use depviz_ops::ops_render::{self, RenderOptions};
use depviz_util::errors::DepvizError;

pub async fn exec(
    file: PathBuf,
    output: PathBuf,
    depth: Option<usize>,
    levels: Option<usize>,
    pdf: Option<PathBuf>,
    index_url: Option<String>,
) -> Result<()> {
    if !file.is_file() {
        return Err(DepvizError::Manifest {
            message: format!("Requirements file '{}' does not exist", file.display()),
        }
        .into());
    }

    let opts = RenderOptions {
        file,
        output,
        depth,
        levels,
        pdf,
        index_url,
    };
    ops_render::render(&opts).await
}
