use super::error::InfrastructureError;
use tokio::fs;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }

    pub async fn save_image(&self, path: &str, data: &[u8]) -> Result<(), InfrastructureError> {
        let mut file = File::create(path).await.map_err(InfrastructureError::IoError)?;
        file.write_all(data).await.map_err(InfrastructureError::IoError)?;
        Ok(())
    }

    pub async fn read_image(&self, path: &str) -> Result<Vec<u8>, InfrastructureError> {
        let data = fs::read(path).await.map_err(InfrastructureError::IoError)?;
        Ok(data)
    }
}
