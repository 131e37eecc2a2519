//! Handler for `depviz export`.

use std::path::PathBuf;

use miette::Result;

use depviz_export::ExportFormat;
use depviz_ops::ops_export::{self, ExportOptions};
use depviz_util::errors::DepvizError;

pub async fn exec(
    format: &str,
    file: PathBuf,
    output: &str,
    depth: Option<usize>,
    index_url: Option<String>,
) -> Result<()> {
    let format: ExportFormat = format
        .parse()
        .map_err(|message| DepvizError::InvalidInput { message })?;

    if !file.is_file() {
        return Err(DepvizError::Manifest {
            message: format!("Requirements file '{}' does not exist", file.display()),
        }
        .into());
    }

    let output = match output {
        "-" => None,
        path => Some(PathBuf::from(path)),
    };

    let opts = ExportOptions {
        file,
        format,
        output,
        depth,
        index_url,
    };
    ops_export::export(&opts).await
}
