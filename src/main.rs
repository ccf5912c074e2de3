//! TON Vanity Wallet Finder CLI
//!
//! Usage:
//!   ton_vanity abc                    # Find an address ending with "abc"
//!   ton_vanity abc -w auto            # Race one worker per CPU core
//!   ton_vanity abc --wallet-version v5r1 -s  # V5R1 contract, save to file

use std::process;

use clap::Parser;

use ton_vanity::{CancelToken, Cli, ResultSink, SearchError, WalletFinder};

fn main() {
    let cli = Cli::parse();

    let config = match cli.to_search_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    println!("TON Vanity Wallet Finder");
    println!("========================");
    println!("Ending:     {}", config.target);
    println!("Contract:   {}", config.version);
    println!("Workers:    {}", config.worker_count());
    println!();
    println!("Searching... (Press Ctrl+C to stop)\n");

    let token = CancelToken::new();
    ctrlc_handler(token.clone());

    let finder = WalletFinder::new(config);
    match finder.find(&token) {
        Ok(found) => {
            let output = cli.save.then(|| cli.output.clone());
            ResultSink::new(!cli.quiet, output).report(&found);
        }
        Err(SearchError::Aborted { reason }) => {
            eprintln!("\nSearch aborted: {}", reason);
            process::exit(130);
        }
        Err(e) => {
            eprintln!("\nSearch failed: {}", e);
            process::exit(1);
        }
    }
}

fn ctrlc_handler(token: CancelToken) {
    ctrlc::set_handler(move || {
        token.cancel_with_reason("interrupted by Ctrl-C");
    })
    .expect("Error setting Ctrl-C handler");
}
