use adi_core::{DataType, Handler, Parser};

/// Prints each field with the name of its data type.
struct Printer;

impl Handler for Printer {
    fn start_data_specifier(&mut self, field_name: &str, length: Option<usize>, data_type: Option<char>) {
        let ty = data_type
            .and_then(DataType::from_indicator)
            .map(|ty| format!("{:?}", ty))
            .unwrap_or_else(|| "-".to_string());
        print!("  {} ({:?} bytes, {})", field_name, length, ty);
    }

    fn data(&mut self, payload: &str) {
        print!(" = {:?}", payload);
    }

    fn end_data_specifier(&mut self, _field_name: &str) {
        println!();
    }

    fn comment(&mut self, text: &str) {
        println!("  # {:?}", text);
    }
}

fn main() {
    let input = "Sample log\n<ADIF_VER:5>3.1.4<EOH>\n<CALL:5:S>VK9NS<NOTES:8:M>QSB\r\nQRM<EOR>\n";

    println!("Input: {:?}\n", input);
    println!("Events:");

    let mut printer = Printer;
    let mut parser = Parser::new(input).with_handler(&mut printer);
    parser.parse();
    println!("\nLines: {}", parser.line_number());
}
