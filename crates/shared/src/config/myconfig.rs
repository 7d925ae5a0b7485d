use anyhow::{Context, Result, anyhow};
use std::{fmt, str::FromStr};

/// How strictly order status changes are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderTransitionPolicy {
    /// Any status may be set to any other status.
    #[default]
    Permissive,
    /// Only moves listed in the order transition table are allowed.
    Strict,
}

impl FromStr for OrderTransitionPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(anyhow!(
                "ORDER_TRANSITION_POLICY must be 'permissive' or 'strict', got '{other}'"
            )),
        }
    }
}

impl fmt::Display for OrderTransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service_name: String,
    pub dev_mode: bool,
    pub enable_file_log: bool,
    pub transition_policy: OrderTransitionPolicy,
    pub reserve_stock_on_checkout: bool,
    pub vendor_top_products: usize,
    pub recent_orders_limit: usize,
    pub bcrypt_cost: u32,
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "storefront".into(),
            dev_mode: false,
            enable_file_log: false,
            transition_policy: OrderTransitionPolicy::Permissive,
            reserve_stock_on_checkout: false,
            vendor_top_products: 3,
            recent_orders_limit: 5,
            bcrypt_cost: 4,
            seed_demo_data: true,
        }
    }
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let service_name = lookup("SERVICE_NAME").unwrap_or(defaults.service_name);

        let dev_mode = parse_flag(&lookup, "DEV_MODE", defaults.dev_mode)?;
        let enable_file_log = parse_flag(&lookup, "ENABLE_FILE_LOG", defaults.enable_file_log)?;
        let reserve_stock_on_checkout = parse_flag(
            &lookup,
            "RESERVE_STOCK_ON_CHECKOUT",
            defaults.reserve_stock_on_checkout,
        )?;
        let seed_demo_data = parse_flag(&lookup, "SEED_DEMO_DATA", defaults.seed_demo_data)?;

        let transition_policy = match lookup("ORDER_TRANSITION_POLICY") {
            Some(value) => value
                .parse::<OrderTransitionPolicy>()
                .context("Invalid ORDER_TRANSITION_POLICY")?,
            None => defaults.transition_policy,
        };

        let vendor_top_products = match lookup("VENDOR_TOP_PRODUCTS") {
            Some(value) => value
                .parse::<usize>()
                .context("VENDOR_TOP_PRODUCTS must be a valid usize")?,
            None => defaults.vendor_top_products,
        };

        let recent_orders_limit = match lookup("RECENT_ORDERS_LIMIT") {
            Some(value) => value
                .parse::<usize>()
                .context("RECENT_ORDERS_LIMIT must be a valid usize")?,
            None => defaults.recent_orders_limit,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(value) => value
                .parse::<u32>()
                .context("BCRYPT_COST must be a valid u32 integer")?,
            None => defaults.bcrypt_cost,
        };

        if !(4..=31).contains(&bcrypt_cost) {
            return Err(anyhow!(
                "BCRYPT_COST must be between 4 and 31, got {bcrypt_cost}"
            ));
        }

        Ok(Self {
            service_name,
            dev_mode,
            enable_file_log,
            transition_policy,
            reserve_stock_on_checkout,
            vendor_top_products,
            recent_orders_limit,
            bcrypt_cost,
            seed_demo_data,
        })
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref() {
        None => Ok(default),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(anyhow!("{key} must be 'true' or 'false', got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.service_name, "storefront");
        assert_eq!(config.transition_policy, OrderTransitionPolicy::Permissive);
        assert!(!config.reserve_stock_on_checkout);
        assert_eq!(config.vendor_top_products, 3);
        assert_eq!(config.recent_orders_limit, 5);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ORDER_TRANSITION_POLICY", "STRICT"),
            ("RESERVE_STOCK_ON_CHECKOUT", "1"),
            ("VENDOR_TOP_PRODUCTS", "5"),
            ("SEED_DEMO_DATA", "false"),
        ]))
        .unwrap();

        assert_eq!(config.transition_policy, OrderTransitionPolicy::Strict);
        assert!(config.reserve_stock_on_checkout);
        assert_eq!(config.vendor_top_products, 5);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn rejects_bad_flag() {
        let result = Config::from_lookup(lookup_from(&[("DEV_MODE", "yes")]));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Config::from_lookup(lookup_from(&[("ORDER_TRANSITION_POLICY", "loose")]));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_range_cost() {
        let result = Config::from_lookup(lookup_from(&[("BCRYPT_COST", "2")]));
        assert!(result.is_err());
    }
}
