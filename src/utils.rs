use std::path::Path;

/// Reads pasted address text from a file. Only the terminating line break
/// editors append is stripped; the rest goes to the parser untouched.
pub async fn read_raw_input(path: impl AsRef<Path>) -> eyre::Result<String> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| eyre::eyre!("Failed to read addresses from {}: {e}", path.display()))?;

    let contents = contents
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(&contents);

    Ok(contents.to_string())
}

pub async fn write_file(path: impl AsRef<Path>, contents: &str) -> eyre::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, contents).await?;
    Ok(())
}
