//! Driver roster rendering
//!
//! The roster is the chat message sent to the driver of one region with the
//! customers to pick up on a given day.

use std::fmt::Write;

use chrono::NaiveDate;
use transporte_core::{ImportedCustomer, RegionTag};

/// Plain-text roster for one region's driver
pub fn roster_message(
    region: &RegionTag,
    customers: &[&ImportedCustomer],
    date: NaiveDate,
) -> String {
    let mut message = format!(
        "📋 *Lista de Clientes - Motorista {}*\n📅 Data: {}\n\n",
        region,
        date.format("%d/%m/%Y")
    );

    for (position, customer) in customers.iter().enumerate() {
        let record = &customer.record;
        // writing into a String cannot fail
        let _ = write!(
            message,
            "*{}. {}*\n🏠 Morada: {}\n🏥 Destino: {}\n⏰ Horário: {}\n📞 Contacto: {}\n\n",
            position + 1,
            record.name,
            record.address,
            record.destination,
            record.time_token,
            record.phone
        );
    }

    let _ = write!(message, "Total: {} clientes", customers.len());
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use transporte_core::{CustomerRecord, RawSpan, ScheduledSlot};

    fn customer(name: &str, time: &str, phone: &str) -> ImportedCustomer {
        let text = format!("{name} {time} Hospital de Leiria Rua Direita 3 {phone}");
        let record = CustomerRecord {
            name: name.to_string(),
            time_token: time.to_string(),
            destination: "Hospital de Leiria".to_string(),
            insurer_name: String::new(),
            address: "Rua Direita 3".to_string(),
            phone: phone.to_string(),
            region: RegionTag::from_static("Coimbra"),
            original_text: RawSpan::new(&text).unwrap(),
        };
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        ImportedCustomer::new(record, ScheduledSlot::new(date, 9, 0).unwrap(), 0)
    }

    #[test]
    fn test_roster_layout() {
        let ana = customer("Ana Lopes", "10:30", "933333333");
        let rui = customer("Rui Sá", "9h", "944444444");
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();

        let message = roster_message(&RegionTag::from_static("Coimbra"), &[&ana, &rui], date);
        let expected = "📋 *Lista de Clientes - Motorista Coimbra*\n\
                        📅 Data: 20/10/2026\n\
                        \n\
                        *1. Ana Lopes*\n\
                        🏠 Morada: Rua Direita 3\n\
                        🏥 Destino: Hospital de Leiria\n\
                        ⏰ Horário: 10:30\n\
                        📞 Contacto: 933333333\n\
                        \n\
                        *2. Rui Sá*\n\
                        🏠 Morada: Rua Direita 3\n\
                        🏥 Destino: Hospital de Leiria\n\
                        ⏰ Horário: 9h\n\
                        📞 Contacto: 944444444\n\
                        \n\
                        Total: 2 clientes";
        assert_eq!(message, expected);
    }

    #[test]
    fn test_empty_roster() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let message = roster_message(&RegionTag::UNASSIGNED, &[], date);
        assert!(message.starts_with("📋 *Lista de Clientes - Motorista Geral*\n📅 Data: 05/01/2026"));
        assert!(message.ends_with("Total: 0 clientes"));
    }
}
