use exprparse::{get_status_string, get_version, parse_expression, Status};
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("exprcalc - simple calculator, version {}", get_version());
    let mut buffer = String::new();
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    loop {
        stdout.write_all("> ".as_bytes())?;
        stdout.flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            // stdin was closed
            return Ok(());
        }
        let res = parse_expression(buffer.trim_end_matches(['\r', '\n']));
        match res {
            Ok(x) => println!("{x}"),
            Err(_) => println!("{}", get_status_string(Status::from(&res))),
        }
        buffer.clear();
    }
}
