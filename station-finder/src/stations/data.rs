//! Station records for the Angamaly / Karukutty / Chalakudy area of Kerala.

use crate::domain::StationRecord;

/// Raw dataset row: name, address, latitude, longitude, phone, agent id.
type Row = (&'static str, &'static str, f64, f64, &'static str, &'static str);

const STATIONS: &[Row] = &[
    (
        "Bharat Petroleum - Chembakassery Fuels",
        "Chakkaraparambu - Puliyanam Rd, Peechanicadu, Angamaly, Kerala",
        10.1978,
        76.3862,
        "9876543210",
        "agent001",
    ),
    (
        "Reliance Petrol Pump",
        "Elavoorkavala, Karukutty, Angamaly, Kerala",
        10.1915,
        76.4012,
        "8765432109",
        "agent002",
    ),
    (
        "Indian Oil - St. Thomas Thelappilly Fuels",
        "Peechanikad, Karukutty, Elavoor Rd, Angamaly, Kerala",
        10.1934,
        76.3956,
        "7654321098",
        "agent003",
    ),
    (
        "Nayara Petrol Pump (ESSAR)",
        "Mookkannoor Ezhattumugham Rd, Angamaly, Kerala",
        10.1912,
        76.3878,
        "6543210987",
        "agent004",
    ),
    (
        "Indian Oil - Paravur Kavala",
        "Ground Floor, Paravur Kavala, West Aluva, Ernakulam, Kerala 683103",
        10.2715,
        76.3548,
        "5432109876",
        "agent005",
    ),
    (
        "Haya Petroleums",
        "118H, Kadukutty, Chalakudy, Valavanagady, Thrissur, Kerala 680309",
        10.2718,
        76.3512,
        "4321098765",
        "agent006",
    ),
    (
        "Hindustan Petroleum",
        "Old Hwy, Chalakudy, Kerala",
        10.2756,
        76.3549,
        "3210987654",
        "agent007",
    ),
    (
        "Indian Oil - Kuzhiparambil Fuels",
        "Karukutty, Ernakulam, Kerala",
        10.1932,
        76.4015,
        "2109876543",
        "agent008",
    ),
    (
        "Jio-bp Mobility Station",
        "No 16/33, NH Road, Karukutty, Angamaly, Kerala",
        10.1930,
        76.4010,
        "1098765432",
        "agent009",
    ),
    (
        "Bharat Petroleum",
        "Near NH 544, Angamaly, Kerala",
        10.2696,
        76.4003,
        "1234567890",
        "agent010",
    ),
    (
        "Indian Oil - Karukutty Junction",
        "Near Karukutty Junction, Karukutty, Kerala",
        10.2700,
        76.4000,
        "2345678901",
        "agent011",
    ),
    (
        "Hindustan Petroleum - Angamaly Town",
        "Angamaly Manjapra Rd, Angamaly, Kerala",
        10.1980,
        76.3850,
        "3456789012",
        "agent012",
    ),
    (
        "Shell Petrol Pump",
        "MC Road, Angamaly, Kerala",
        10.2000,
        76.3900,
        "4567890123",
        "agent013",
    ),
    (
        "Indian Oil - Thuravoor Junction",
        "Thuravoor Jn, Angamaly, Kerala",
        10.1920,
        76.3880,
        "5678901234",
        "agent014",
    ),
    (
        "BP Petrol Pump",
        "Angamaly NH 544, Kerala",
        10.2705,
        76.4005,
        "6789012345",
        "agent015",
    ),
    (
        "Reliance Petroleum",
        "Near NH Road, Karukutty, Angamaly, Kerala",
        10.1910,
        76.4010,
        "7890123456",
        "agent016",
    ),
    (
        "Bharat Petroleum - Manjapra Road",
        "Angamaly Manjapra Rd, Angamaly, Kerala",
        10.1990,
        76.3860,
        "8901234567",
        "agent017",
    ),
    (
        "Indian Oil - Elavoor",
        "Elavoor Jn, Angamaly, Kerala",
        10.1900,
        76.4000,
        "9012345678",
        "agent018",
    ),
    (
        "Nayara Energy",
        "Angamaly Bypass Rd, Angamaly, Kerala",
        10.1950,
        76.3900,
        "1234509876",
        "agent019",
    ),
    (
        "Indian Oil - Old NH Junction",
        "NH544, Angamaly, Kerala",
        10.2005,
        76.3905,
        "2345012345",
        "agent020",
    ),
];

/// All stations in the dataset, in their original order.
pub fn all_stations() -> Vec<StationRecord> {
    STATIONS
        .iter()
        .map(|&(name, address, latitude, longitude, phone, agent_id)| {
            StationRecord::new(name, address, latitude, longitude, phone, agent_id)
        })
        .collect()
}
