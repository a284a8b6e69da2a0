//! `template` subcommand: offline checks on message template text.

use alertaz_core::template::{analyze, SmsEncoding, TemplateHints};

pub fn run_template(text: &str) {
    print!("{}", format_template_report(&analyze(text)));
}

pub fn format_template_report(hints: &TemplateHints) -> String {
    let encoding = match hints.encoding {
        SmsEncoding::Gsm7 => "GSM-7",
        SmsEncoding::Ucs2 => "UCS-2 (unicode)",
    };
    let variables = if hints.variables.is_empty() {
        "none".to_string()
    } else {
        hints
            .variables
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "encoding:   {}\ncharacters: {}\nsegments:   {}\nvariables:  {}\n",
        encoding, hints.characters, hints.segments, variables
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_plain_template() {
        let report = format_template_report(&analyze("Hi {{name}}, code {{code}}"));
        assert_eq!(
            report,
            "encoding:   GSM-7\ncharacters: 26\nsegments:   1\nvariables:  code, name\n"
        );
    }

    #[test]
    fn test_report_for_unicode_template() {
        let report = format_template_report(&analyze("Salam, dünya"));
        assert!(report.starts_with("encoding:   UCS-2 (unicode)\n"));
        assert!(report.ends_with("variables:  none\n"));
    }
}
