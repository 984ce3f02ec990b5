// Copyright 2024 Stefan Junker
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[macro_use]
extern crate log;
#[macro_use]
extern crate structopt;

mod cli;

use commons::prelude_errors::*;
use structopt::StructOpt;

fn main() -> Fallible<()> {
    let cli_opts = cli::CliOptions::from_args();
    env_logger::Builder::from_default_env()
        .filter(Some(module_path!()), cli_opts.log_level())
        .init();

    let config =
        manifest_config::load_filepath(&cli_opts.metadata_path, cli_opts.api_key.as_deref())?;
    info!("client configuration:\n{:#?}", &config);

    let output =
        serde_json::to_string_pretty(&config).context("failed to serialize configuration")?;
    println!("{}", output);

    Ok(())
}
