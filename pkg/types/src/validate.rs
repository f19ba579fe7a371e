use anyhow::{Result, bail};

/// Maximum length of a DNS-1123 subdomain (node names).
const MAX_SUBDOMAIN_LEN: usize = 253;

/// Maximum length of a single DNS label.
const MAX_LABEL_LEN: usize = 63;

/// Validate a node name as a DNS-1123 subdomain.
/// Rules: dot-separated labels of lowercase `[a-z0-9-]`, each label at most 63
/// chars with no leading/trailing hyphen, whole name at most 253 chars.
pub fn validate_node_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("node name must not be empty");
    }
    if name.len() > MAX_SUBDOMAIN_LEN {
        bail!(
            "node name '{}' exceeds {} characters (got {})",
            name,
            MAX_SUBDOMAIN_LEN,
            name.len()
        );
    }
    for label in name.split('.') {
        validate_label(name, label)?;
    }
    Ok(())
}

fn validate_label(name: &str, label: &str) -> Result<()> {
    if label.is_empty() {
        bail!("node name '{}' contains an empty label", name);
    }
    if label.len() > MAX_LABEL_LEN {
        bail!(
            "label '{}' in node name '{}' exceeds {} characters",
            label,
            name,
            MAX_LABEL_LEN
        );
    }
    if label.starts_with('-') || label.ends_with('-') {
        bail!(
            "label '{}' in node name '{}' must not start or end with a hyphen",
            label,
            name
        );
    }
    if !label
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        bail!(
            "node name '{}' must contain only lowercase letters, digits, hyphens and dots",
            name
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(validate_node_name("worker-1").is_ok());
        assert!(validate_node_name("ip-10-0-1-17.ec2.internal").is_ok());
        assert!(validate_node_name("a").is_ok());
        assert!(validate_node_name("node-123.cluster.local").is_ok());
    }

    #[test]
    fn invalid_names() {
        assert!(validate_node_name("").is_err());
        assert!(validate_node_name("Worker-1").is_err());
        assert!(validate_node_name("worker_1").is_err());
        assert!(validate_node_name("-leading").is_err());
        assert!(validate_node_name("trailing-.example").is_err());
        assert!(validate_node_name("double..dot").is_err());
        assert!(validate_node_name(".leading-dot").is_err());
        assert!(validate_node_name(&"a".repeat(64)).is_err());
        assert!(validate_node_name(&["a"; 130].join(".")).is_err());
    }
}
