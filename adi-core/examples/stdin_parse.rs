use std::io::Read;
use adi_core::Parser;

fn main() {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input).unwrap();

    let mut print = |event: adi_core::Event<'_>| eprintln!("EVENT: {:?}", event);
    let mut parser = Parser::from_bytes(input).unwrap().with_handler(&mut print);
    parser.parse();
    eprintln!("LINES: {}", parser.line_number());
}
