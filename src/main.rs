use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use moneroo::payments::{methods, payout_methods};
use moneroo::{ClientConfig, Customer, MonerooClient, PaymentInitParams, PayoutInitParams};

#[derive(Parser, Debug)]
#[command(name = "moneroo")]
#[command(about = "Create and inspect Moneroo payments and payouts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Moneroo secret key
    #[arg(long, env = "MONEROO_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Override the API base URL for this invocation
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List payment methods
    #[command(after_help = "\
Examples:
  moneroo methods                      # All payment methods
  moneroo methods --country BJ         # Methods available in Benin
  moneroo methods --currency XOF       # Methods settling in XOF")]
    Methods {
        #[arg(long, value_name = "ISO2")]
        country: Option<String>,
        #[arg(long, value_name = "CODE")]
        currency: Option<String>,
    },

    /// List payout methods
    PayoutMethods {
        #[arg(long, value_name = "ISO2")]
        country: Option<String>,
        #[arg(long, value_name = "CODE")]
        currency: Option<String>,
    },

    /// Initialize a payment and print its checkout URL
    #[command(after_help = "\
Examples:
  moneroo pay 1000 --email jane@example.com --first-name Jane --last-name Doe \\
      --return-url https://shop.example.com/return --method mtn_bj")]
    Pay {
        /// Amount in minor units
        amount: u64,
        #[arg(long, default_value = "XOF")]
        currency: String,
        #[arg(long, default_value = "Payment")]
        description: String,
        #[command(flatten)]
        customer: CustomerArgs,
        #[arg(long, value_name = "URL")]
        return_url: String,
        /// Payment method code; the configured default is used when omitted
        #[arg(long, value_name = "CODE")]
        method: Option<String>,
    },

    /// Send a payout to a recipient
    #[command(after_help = "\
Examples:
  moneroo payout 1000 --method mtn_bj --msisdn 22912345678 \\
      --email john@example.com --first-name John --last-name Doe")]
    Payout {
        /// Amount in minor units
        amount: u64,
        #[arg(long, default_value = "XOF")]
        currency: String,
        #[arg(long, default_value = "Payout")]
        description: String,
        #[command(flatten)]
        customer: CustomerArgs,
        /// Payout method code
        #[arg(long, value_name = "CODE")]
        method: String,
        #[arg(long)]
        msisdn: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        account_number: Option<String>,
        /// Metadata entries as key=value (repeatable)
        #[arg(long = "meta", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        metadata: Vec<(String, String)>,
    },

    /// Show the status of a payment transaction
    Status {
        #[arg(value_name = "TRANSACTION_ID")]
        id: String,
    },

    /// Verify a payout, optionally fetching its full details
    PayoutStatus {
        #[arg(value_name = "PAYOUT_ID")]
        id: String,
        /// Also fetch full payout details
        #[arg(long)]
        details: bool,
    },
}

#[derive(clap::Args, Debug)]
struct CustomerArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
}

impl From<&CustomerArgs> for Customer {
    fn from(args: &CustomerArgs) -> Self {
        Customer::new(&args.email, &args.first_name, &args.last_name)
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {}", raw))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    match &cli.command {
        Commands::Methods { country, currency } => {
            let mut list = match country {
                Some(country) => methods::by_country(country),
                None => methods::all().iter().collect(),
            };
            if let Some(currency) = currency {
                list.retain(|m| m.currency.eq_ignore_ascii_case(currency));
            }

            println!("{} payment method(s)", list.len());
            for method in list {
                println!(
                    "  {:<22} {:<34} {:<4} {}",
                    method.code.as_str(),
                    method.name,
                    method.currency,
                    method.countries.join(",")
                );
            }
        }
        Commands::PayoutMethods { country, currency } => {
            let mut list = match country {
                Some(country) => payout_methods::by_country(country),
                None => payout_methods::all().iter().collect(),
            };
            if let Some(currency) = currency {
                list.retain(|m| m.currency.eq_ignore_ascii_case(currency));
            }

            println!("{} payout method(s)", list.len());
            for method in list {
                let fields: Vec<_> = method.required_fields.iter().map(|f| f.as_str()).collect();
                println!(
                    "  {:<22} {:<34} {:<4} requires {}",
                    method.code.as_str(),
                    method.name,
                    method.currency,
                    fields.join(",")
                );
            }
        }
        Commands::Pay {
            amount,
            currency,
            description,
            customer,
            return_url,
            method,
        } => {
            let mut params = PaymentInitParams::new(
                *amount,
                currency,
                description,
                Customer::from(customer),
                return_url,
            );
            if let Some(method) = method {
                params = params.with_method_code(method);
            }

            let client = client()?;
            let payment = client
                .initiate_payment(&params, &api_key(&cli)?, cli.base_url.as_deref())
                .await
                .context("Failed to initialize payment")?;
            println!("Transaction ID: {}", payment.data.id);
            println!("Checkout URL:   {}", payment.data.checkout_url);
        }
        Commands::Payout {
            amount,
            currency,
            description,
            customer,
            method,
            msisdn,
            phone,
            account_number,
            metadata,
        } => {
            let mut params = PayoutInitParams::new(
                *amount,
                currency,
                description,
                Customer::from(customer),
                method,
            );
            params.msisdn = msisdn.clone();
            params.phone = phone.clone();
            params.account_number = account_number.clone();
            for (key, value) in metadata {
                params = params.with_metadata(key, value.as_str());
            }

            let client = client()?;
            let payout = client
                .initiate_payout(&params, &api_key(&cli)?, cli.base_url.as_deref())
                .await
                .context("Failed to initialize payout")?;
            println!("Payout ID: {}", payout.data.id);
            if let Some(status) = &payout.data.status {
                println!("Status:    {}", status);
            }
        }
        Commands::Status { id } => {
            let client = client()?;
            let status = client
                .check_transaction_status(id, &api_key(&cli)?, cli.base_url.as_deref())
                .await
                .with_context(|| format!("Failed to fetch transaction {}", id))?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Commands::PayoutStatus { id, details } => {
            let client = client()?;
            let key = api_key(&cli)?;
            let verified = client
                .verify_payout(id, &key, cli.base_url.as_deref())
                .await
                .with_context(|| format!("Failed to verify payout {}", id))?;
            println!("{}", serde_json::to_string_pretty(&verified)?);

            if *details {
                let payout = client
                    .get_payout(id, &key, cli.base_url.as_deref())
                    .await
                    .with_context(|| format!("Failed to fetch payout {}", id))?;
                println!("{}", serde_json::to_string_pretty(&payout)?);
            }
        }
    }

    Ok(())
}

fn client() -> anyhow::Result<MonerooClient> {
    let config = ClientConfig::from_env().context("Invalid Moneroo configuration")?;
    tracing::info!("Using Moneroo API at {}", config.base_url);
    MonerooClient::new(config).context("Failed to create Moneroo client")
}

fn api_key(cli: &Cli) -> anyhow::Result<String> {
    cli.api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .context("MONEROO_API_KEY is not set (pass --api-key or add it to .env)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("order_id=123"),
            Ok(("order_id".to_string(), "123".to_string()))
        );
        assert_eq!(
            parse_key_value("note=a=b"),
            Ok(("note".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_value("=1").is_err());
        assert!(parse_key_value("missing").is_err());
    }

    #[test]
    fn test_payout_command_arguments() {
        let cli = Cli::try_parse_from([
            "moneroo", "payout", "1000", "--method", "mtn_bj", "--msisdn", "22912345678",
            "--email", "john@example.com", "--first-name", "John", "--last-name", "Doe",
            "--meta", "order_id=123", "--meta", "customer_id=456",
        ])
        .unwrap();

        match cli.command {
            Commands::Payout {
                amount,
                method,
                msisdn,
                metadata,
                customer,
                ..
            } => {
                assert_eq!(amount, 1000);
                assert_eq!(method, "mtn_bj");
                assert_eq!(msisdn.as_deref(), Some("22912345678"));
                assert_eq!(metadata.len(), 2);
                assert_eq!(Customer::from(&customer).full_name(), "John Doe");
            }
            other => panic!("expected payout command, got {:?}", other),
        }
    }

    #[test]
    fn test_pay_command_requires_return_url() {
        let result = Cli::try_parse_from([
            "moneroo", "pay", "1000", "--email", "jane@example.com", "--first-name", "Jane",
            "--last-name", "Doe",
        ]);
        assert!(result.is_err());
    }
}
