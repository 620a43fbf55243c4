use anyhow::{Context, Result};
use bitb_tools::{
    breeds::{find_breed_by_label, BREEDS},
    catalog::generate_catalog,
    cli::{Cli, Commands},
    contact::{normalize_to_e164, tel_link, whatsapp_link, DEFAULT_COUNTRY_CODE},
    download::ensure_sources_downloaded,
    writer::write_catalog,
};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Sync {
            output,
            format,
            force,
            cache_dir,
        } => {
            let start = Instant::now();

            let (fci_csv, akc_csv) = ensure_sources_downloaded(cache_dir, force)?;
            let catalog = generate_catalog(&fci_csv, &akc_csv)?;
            write_catalog(&catalog, &output, format)?;

            let elapsed = start.elapsed();
            println!(
                "\nWrote {:?} ({} entries, incl. Indie/Mix/Cross) in {:.1}s",
                output,
                catalog.len(),
                elapsed.as_secs_f64()
            );
        }

        Commands::Download { cache_dir, force } => {
            let (fci_csv, akc_csv) = ensure_sources_downloaded(cache_dir, force)?;
            println!(
                "Downloaded sources ({} + {} bytes)",
                fci_csv.len(),
                akc_csv.len()
            );
        }

        Commands::Convert {
            fci_csv,
            akc_csv,
            output,
            format,
        } => {
            let start = Instant::now();

            let fci = std::fs::read_to_string(&fci_csv)
                .with_context(|| format!("Failed to read {:?}", fci_csv))?;
            let akc = std::fs::read_to_string(&akc_csv)
                .with_context(|| format!("Failed to read {:?}", akc_csv))?;

            let catalog = generate_catalog(&fci, &akc)?;
            write_catalog(&catalog, &output, format)?;

            let elapsed = start.elapsed();
            println!(
                "\nWrote {:?} ({} entries) in {:.1}s",
                output,
                catalog.len(),
                elapsed.as_secs_f64()
            );
        }

        Commands::Lookup { label } => match find_breed_by_label(&label) {
            Some(entry) => {
                println!("{} [{}] ({})", entry.label, entry.key, entry.breed_type);
                if let Some(fci) = &entry.fci {
                    println!(
                        "  FCI: group {} {}",
                        fci.group_no.map(|n| n.to_string()).unwrap_or_default(),
                        fci.group_name.unwrap_or("")
                    );
                }
                if let Some(akc) = &entry.akc {
                    println!("  AKC: {} group", akc.group_name.unwrap_or("?"));
                }
            }
            None => println!("No catalog entry for '{}'", label),
        },

        Commands::List => {
            for entry in BREEDS {
                println!("{}  [{}]", entry.label, entry.key);
            }
            println!("\n{} entries", BREEDS.len());
        }

        Commands::Phone {
            number,
            country_code,
            message,
        } => {
            let cc = country_code.as_deref().unwrap_or(DEFAULT_COUNTRY_CODE);

            match normalize_to_e164(&number, cc) {
                Some(e164) => {
                    println!("normalized: {}", e164);
                    if let Some(link) = whatsapp_link(&e164, message.as_deref()) {
                        println!("whatsapp:   {}", link);
                    }
                }
                None => println!("normalized: (no result)"),
            }
            match tel_link(&number, cc) {
                Some(link) => println!("tel:        {}", link),
                None => println!("tel:        (no result)"),
            }
        }
    }

    Ok(())
}
