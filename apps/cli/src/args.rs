use std::env;

#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub utc_offset: Option<String>,
    pub data_dir: Option<String>,
    pub log_json: bool,
}

pub fn parse_args() -> Result<CliArgs, String> {
    parse_from(env::args().skip(1))
}

fn parse_from(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut args = args.into_iter();
    let mut parsed = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --port".to_string())?;
                let port = value
                    .parse::<u16>()
                    .map_err(|_| format!("invalid port value: {value}"))?;
                parsed.port = Some(port);
            }
            "--utc-offset" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --utc-offset".to_string())?;
                parsed.utc_offset = Some(value);
            }
            "--data-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data-dir".to_string())?;
                parsed.data_dir = Some(value);
            }
            "--log-json" => {
                parsed.log_json = true;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument: {arg}"));
            }
        }
    }

    Ok(parsed)
}

pub fn print_help() {
    println!(
        "Waste Tracker\n\n\
Usage:\n  waste-tracker [--port <port>] [--utc-offset <+HH:MM>] [--data-dir <dir>] [--log-json]\n\n\
Options:\n  --port <port>          Override the configured port for this run only\n  --utc-offset <offset>  Reporting offset used for calendar days, e.g. -04:00\n  --data-dir <dir>       Directory holding the waste database\n  --log-json             Emit logs as JSON lines\n  -h, --help             Show this help message\n"
    );
}
