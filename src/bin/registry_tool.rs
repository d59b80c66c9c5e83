//! Registry Tool - command line access to contract registries

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use contract_registry::application::use_cases::contracts::{
    ConflictPolicy, GetContractUseCase, ListContractsUseCase, LoadRegistryUseCase,
    MergeRegistriesUseCase, NormalizeRegistryUseCase,
};
use contract_registry::domain::gateways::ArtifactSource;
use contract_registry::domain::models::{ContractNamePolicy, DomainRegistry};
use contract_registry::infrastructure::driven_adapters::config::LoggingConfig;
use contract_registry::infrastructure::driven_adapters::logging;
use contract_registry::infrastructure::driven_adapters::{
    BundledArtifacts, DirectoryArtifacts, JsonArtifactStore,
};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Contract registry lookup and maintenance")]
struct Args {
    /// Read `{dir}/{domain}.json` instead of the bundled registries
    #[clap(long, env = "REGISTRY_ARTIFACTS_DIR", global = true)]
    artifacts_dir: Option<PathBuf>,

    /// Emit logs as JSON
    #[clap(long, global = true)]
    json_logs: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the address of one contract
    Get {
        #[clap(long)]
        domain: String,
        #[clap(long)]
        chain_id: u64,
        #[clap(long)]
        contract: String,
        /// Also accept contract names that are not advertised
        #[clap(long)]
        all_contracts: bool,
    },
    /// List deployed contracts grouped by chain
    List {
        /// Restrict to one domain
        #[clap(long)]
        domain: Option<String>,
    },
    /// Merge two registry files
    Merge {
        #[clap(long = "registry-1")]
        registry_1: PathBuf,
        #[clap(long = "registry-2")]
        registry_2: PathBuf,
        #[clap(short, long = "output-registry")]
        output_registry: PathBuf,
        /// Contract name to drop from both inputs (repeatable)
        #[clap(short = 'd', long = "deprecated-contract")]
        deprecated_contracts: Vec<String>,
        /// prefer-first, prefer-second or abort
        #[clap(long, default_value = "abort")]
        on_conflict: ConflictPolicy,
    },
    /// Rewrite a registry file in the standard layout
    Normalize {
        #[clap(long)]
        registry: PathBuf,
    },
}

async fn load_registry(artifacts_dir: Option<PathBuf>) -> anyhow::Result<Arc<DomainRegistry>> {
    let source: Arc<dyn ArtifactSource> = match artifacts_dir {
        Some(dir) => Arc::new(DirectoryArtifacts::new(dir)),
        None => Arc::new(BundledArtifacts),
    };
    Ok(Arc::new(LoadRegistryUseCase::new(source).execute().await?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(&LoggingConfig { json: args.json_logs }, "contract_registry=warn");

    match args.command {
        Command::Get {
            domain,
            chain_id,
            contract,
            all_contracts,
        } => {
            let policy = if all_contracts {
                ContractNamePolicy::All
            } else {
                ContractNamePolicy::Advertised
            };
            let registry = load_registry(args.artifacts_dir).await?;
            let address =
                GetContractUseCase::new(registry, policy).execute(&domain, chain_id, &contract)?;
            println!("{address}");
        }
        Command::List { domain } => {
            let registry = load_registry(args.artifacts_dir).await?;
            for listing in ListContractsUseCase::new(registry).execute(domain.as_deref())? {
                println!("{}", listing.domain);
                for chain in listing.chains {
                    println!("  {}", chain.chain_id);
                    for entry in chain.contracts {
                        println!("    {}: {}", entry.name, entry.address);
                    }
                }
            }
        }
        Command::Merge {
            registry_1,
            registry_2,
            output_registry,
            deprecated_contracts,
            on_conflict,
        } => {
            let written = MergeRegistriesUseCase::new(Arc::new(JsonArtifactStore::new()))
                .execute(
                    &registry_1,
                    &registry_2,
                    &output_registry,
                    &deprecated_contracts,
                    on_conflict,
                )
                .await?;
            println!("Merged registry written to {}", written.display());
        }
        Command::Normalize { registry } => {
            NormalizeRegistryUseCase::new(Arc::new(JsonArtifactStore::new()))
                .execute(&registry)
                .await?;
            println!("Normalized {}", registry.display());
        }
    }

    Ok(())
}
