/// HTTP method and resource path of the operation a gateway request targets.
///
/// Both fields are either present or absent together. Parsing never fails, a
/// malformed identifier simply yields [`ParsedResource::default`]. The values
/// are diagnostic context only and never influence the decision itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResource {
    pub http_method: Option<String>,
    pub resource_path: Option<String>,
}

impl ParsedResource {
    /// Parses a method ARN of the form
    /// `arn:<partition>:execute-api:<region>:<account>:<apiId>/<stage>/<method>/<path>`.
    ///
    /// The path keeps any slashes it contains, so `.../prod/GET/orders/5`
    /// yields method `GET` and path `orders/5`.
    pub fn parse(method_arn: Option<&str>) -> Self {
        method_arn
            .filter(|arn| !arn.is_empty())
            .and_then(Self::split_arn)
            .unwrap_or_default()
    }

    fn split_arn(arn: &str) -> Option<Self> {
        let api_gateway_arn = arn.splitn(6, ':').nth(5)?;
        let mut parts = api_gateway_arn.splitn(4, '/');
        let _api_id = parts.next()?;
        let _stage = parts.next()?;
        let http_method = parts.next()?;
        let resource_path = parts.next()?;
        Some(Self {
            http_method: Some(http_method.to_string()),
            resource_path: Some(resource_path.to_string()),
        })
    }

    /// Method for log lines, `-` when unknown
    pub fn method_or_dash(&self) -> &str {
        self.http_method.as_deref().unwrap_or("-")
    }

    /// Path for log lines, `-` when unknown
    pub fn path_or_dash(&self) -> &str {
        self.resource_path.as_deref().unwrap_or("-")
    }
}
