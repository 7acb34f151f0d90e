//! AWS SDK client setup.

use aws_sdk_dynamodb::Client;
use tokio::sync::OnceCell;

/// Where the DynamoDB client connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsSettings {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
}

impl Default for AwsSettings {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            region: "us-east-1".to_string(),
        }
    }
}

impl AwsSettings {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Creates a DynamoDB client with the given settings.
///
/// Credentials come from the AWS default provider chain.
pub async fn create_client(settings: &AwsSettings) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(settings.region.clone()));

    if let Some(endpoint) = &settings.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

/// Builds the client on first use and shares it for the life of the process.
#[derive(Debug)]
pub struct DynamoDbClientProvider {
    settings: AwsSettings,
    client: OnceCell<Client>,
}

impl DynamoDbClientProvider {
    pub fn new(settings: AwsSettings) -> Self {
        Self {
            settings,
            client: OnceCell::new(),
        }
    }

    /// Provider around an already built client.
    pub fn with_client(client: Client) -> Self {
        Self {
            settings: AwsSettings::default(),
            client: OnceCell::new_with(Some(client)),
        }
    }

    pub fn settings(&self) -> &AwsSettings {
        &self.settings
    }

    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    /// Builds the client if it does not exist yet.
    pub async fn initialize(&self) {
        self.client().await;
    }

    /// Returns the client, building it on first use.
    pub async fn client(&self) -> &Client {
        self.client
            .get_or_init(|| async {
                tracing::debug!(destination = %self.settings.target_display(), "Creating DynamoDB client");
                create_client(&self.settings).await
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        let local = AwsSettings {
            endpoint_url: Some("http://localhost:8000".to_string()),
            region: "us-east-1".to_string(),
        };
        assert_eq!(local.target_display(), "Local DynamoDB (http://localhost:8000)");
        assert_eq!(
            AwsSettings::default().target_display(),
            "AWS DynamoDB (region: us-east-1)"
        );
    }

    #[tokio::test]
    async fn test_provider_builds_client_once() {
        let provider = DynamoDbClientProvider::new(AwsSettings {
            endpoint_url: Some("http://localhost:8000".to_string()),
            region: "eu-west-1".to_string(),
        });
        assert!(!provider.is_initialized());

        let first = provider.client().await as *const Client;
        let second = provider.client().await as *const Client;

        assert!(provider.is_initialized());
        assert_eq!(first, second);
    }
}
