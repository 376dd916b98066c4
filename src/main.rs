use clap::Arg;
use privca::model::{
    GetCaPoolRequest, GetCertificateRequest, ListCaPoolsRequest, ListCertificatesRequest,
};
use privca::path::names;
use privca::{CertificateAuthorityClient, ClientOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let matches = clap::Command::new("privca")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("CONFIG")
                .help("Path to a YAML file with client options"),
        )
        .arg(
            Arg::new("endpoint")
                .short('e')
                .long("endpoint")
                .value_name("ENDPOINT")
                .help("Service endpoint, overrides the config file"),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .value_name("TOKEN")
                .help("Bearer token attached to every request"),
        )
        .subcommand(
            clap::Command::new("list-ca-pools")
                .about("List CA pools in a location")
                .arg(Arg::new("parent").required(true)),
        )
        .subcommand(
            clap::Command::new("list-certificates")
                .about("List certificates in a CA pool")
                .arg(Arg::new("parent").required(true)),
        )
        .subcommand(
            clap::Command::new("get-ca-pool")
                .about("Show one CA pool")
                .arg(Arg::new("name").required(true)),
        )
        .subcommand(
            clap::Command::new("get-certificate")
                .about("Show one certificate")
                .arg(Arg::new("name").required(true)),
        )
        .subcommand(
            clap::Command::new("parse-name")
                .about("Decompose a resource name into its segments")
                .arg(Arg::new("name").required(true)),
        )
        .subcommand_required(true)
        .get_matches();

    let mut options = match matches.get_one::<String>("config") {
        Some(path) => ClientOptions::from_yaml_file(path)?,
        None => ClientOptions::default(),
    };
    if let Some(endpoint) = matches.get_one::<String>("endpoint") {
        options.endpoint = endpoint.clone();
    }
    if let Some(token) = matches.get_one::<String>("token") {
        options.auth_token = Some(token.clone());
    }

    // parse-name needs no client
    if let Some(sub) = matches.subcommand_matches("parse-name") {
        let name = sub.get_one::<String>("name").unwrap();
        print_parsed_name(name);
        return Ok(());
    }

    let client = CertificateAuthorityClient::new(options)?;

    match matches.subcommand() {
        Some(("list-ca-pools", sub)) => {
            let parent = sub.get_one::<String>("parent").unwrap();
            let pager = client
                .list_ca_pools(ListCaPoolsRequest::new(parent.clone()))
                .await?;
            for pool in pager.all_items().await? {
                println!("{}", pool.name);
            }
        }
        Some(("list-certificates", sub)) => {
            let parent = sub.get_one::<String>("parent").unwrap();
            let pager = client
                .list_certificates(ListCertificatesRequest::new(parent.clone()))
                .await?;
            for certificate in pager.all_items().await? {
                println!("{}", certificate.name);
            }
        }
        Some(("get-ca-pool", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let pool = client.get_ca_pool(GetCaPoolRequest::new(name.clone())).await?;
            println!("{}", serde_json::to_string_pretty(&pool)?);
        }
        Some(("get-certificate", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let certificate = client
                .get_certificate(GetCertificateRequest::new(name.clone()))
                .await?;
            println!("{}", serde_json::to_string_pretty(&certificate)?);
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

fn print_parsed_name(name: &str) {
    let parsers: [(&str, fn(&str) -> Option<std::collections::HashMap<String, String>>); 5] = [
        ("certificate", names::parse_certificate_path),
        (
            "certificate_revocation_list",
            names::parse_certificate_revocation_list_path,
        ),
        (
            "certificate_authority",
            names::parse_certificate_authority_path,
        ),
        ("ca_pool", names::parse_ca_pool_path),
        ("certificate_template", names::parse_certificate_template_path),
    ];

    for (kind, parse) in parsers {
        if let Some(parts) = parse(name) {
            println!("{}:", kind);
            let mut parts: Vec<_> = parts.into_iter().collect();
            parts.sort();
            for (key, value) in parts {
                println!("  {} = {}", key, value);
            }
            return;
        }
    }

    println!("Name does not match any known resource shape");
}
