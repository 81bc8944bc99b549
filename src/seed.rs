//! Built-in sample catalog for central Tula, Russia.
//!
//! Twenty features per mobility profile, spread 150 m to 2 km apart. Used by
//! the CLI when no catalog file is given.

use crate::model::{Category, NewFeature};

type Row = (Category, &'static str, f64, f64, &'static str);

const WHEELCHAIR: &[Row] = &[
    (Category::FixedRamp, "Ramp at the mall entrance", 54.1931, 37.6175, "Lenina Ave 85 (Gostiny Dvor mall)"),
    (Category::Elevator, "Elevator in Gostiny Dvor mall", 54.1932, 37.6178, "Gostiny Dvor mall"),
    (Category::WideDoor, "Automatic doors", 54.2020, 37.6300, "Maxi mall"),
    (Category::AccessibleParking, "Parking at Maxi mall", 54.2022, 37.6295, "Maxi mall"),
    (Category::FoldingRamp, "Folding ramp at the station", 54.1910, 37.6250, "Tula-1 railway station"),
    (Category::Elevator, "Passenger elevator", 54.1912, 37.6255, "Tula-1 railway station"),
    (Category::FixedRamp, "Ramp at the clinic", 54.1920, 37.6200, "Clinic No. 1, Pervomayskaya St"),
    (Category::AccessibleParking, "Parking at the clinic", 54.1918, 37.6195, "Pervomayskaya St"),
    (Category::WideDoor, "Bank entrance", 54.1945, 37.6190, "Lenina Ave 60"),
    (Category::Elevator, "Elevator in the bank", 54.1947, 37.6193, "Lenina Ave 60"),
    (Category::FixedRamp, "Ramp at the pharmacy", 54.1890, 37.6180, "Demonstratsii St"),
    (Category::AccessibleParking, "Parking at the pharmacy", 54.1885, 37.6170, "Demonstratsii St"),
    (Category::WideDoor, "Shop entrance", 54.1880, 37.6220, "Puzakova St"),
    (Category::FoldingRamp, "Folding ramp at the shop", 54.1875, 37.6230, "Puzakova St"),
    (Category::Elevator, "Elevator in apartment block", 54.1950, 37.6150, "Leyteyzena St 10"),
    (Category::FixedRamp, "Ramp at the school", 54.1850, 37.6100, "Kaulya St"),
    (Category::AccessibleParking, "Parking at the school", 54.1848, 37.6095, "Kaulya St"),
    (Category::WideDoor, "Park entrance", 54.1900, 37.6100, "Belousov Central Park"),
    (Category::Elevator, "Elevator in the shopping center", 54.2080, 37.6350, "Rio shopping center"),
    (Category::FixedRamp, "Ramp at the administration", 54.1965, 37.6140, "Tula Kremlin"),
];

const LOW_VISION: &[Row] = &[
    (Category::TactileGuideStrip, "Tactile path at the Kremlin", 54.1965, 37.6140, "Tula Kremlin"),
    (Category::AudioTrafficSignal, "Audio signal on the square", 54.1928, 37.6168, "Lenina Square"),
    (Category::TactileWarningStrip, "Before the crossing on Lenina Square", 54.1926, 37.6165, "Lenina Square"),
    (Category::HelpButton, "Help button at the station", 54.1910, 37.6250, "Tula-1 railway station"),
    (Category::TactileGuideStrip, "Path to the station", 54.1905, 37.6240, "Puteyskaya St"),
    (Category::AudioTrafficSignal, "Signal at Maxi mall", 54.2020, 37.6300, "Oktyabrskaya St"),
    (Category::TactileWarningStrip, "In front of Maxi mall", 54.2018, 37.6295, "Oktyabrskaya St"),
    (Category::HelpButton, "Button at the clinic", 54.1920, 37.6200, "Clinic No. 1"),
    (Category::TactileGuideStrip, "Path to the clinic", 54.1925, 37.6210, "Pervomayskaya St"),
    (Category::AudioTrafficSignal, "On Demonstratsii St", 54.1890, 37.6180, "Demonstratsii St"),
    (Category::TactileWarningStrip, "In front of the pharmacy", 54.1888, 37.6175, "Demonstratsii St"),
    (Category::HelpButton, "In the entrance hall", 54.1950, 37.6150, "Leyteyzena St 10"),
    (Category::TactileGuideStrip, "To the bank", 54.1945, 37.6190, "Lenina Ave"),
    (Category::AudioTrafficSignal, "At the bank", 54.1943, 37.6185, "Lenina Ave"),
    (Category::TactileWarningStrip, "In front of the shop", 54.1880, 37.6220, "Puzakova St"),
    (Category::HelpButton, "At the shop", 54.1875, 37.6235, "Puzakova St"),
    (Category::TactileGuideStrip, "In the park", 54.1900, 37.6100, "Central Park"),
    (Category::AudioTrafficSignal, "At the park exit", 54.1895, 37.6080, "Frunze St"),
    (Category::TactileWarningStrip, "In front of the school", 54.1850, 37.6100, "Kaulya St"),
    (Category::HelpButton, "At the school entrance", 54.1845, 37.6090, "Kaulya St"),
];

const CANE: &[Row] = &[
    (Category::Handrail, "Handrails on the Kremlin stairs", 54.1965, 37.6140, "Tula Kremlin"),
    (Category::CurbCut, "Curb cut at the Kremlin", 54.1963, 37.6135, "Mendeleevskaya St"),
    (Category::Handrail, "Handrails at the mall entrance", 54.1931, 37.6175, "Gostiny Dvor mall"),
    (Category::CurbCut, "On Lenina Ave", 54.1935, 37.6180, "Lenina Ave"),
    (Category::Handrail, "In the station underpass", 54.1910, 37.6250, "Tula-1 railway station"),
    (Category::CurbCut, "At the station", 54.1908, 37.6245, "Puteyskaya St"),
    (Category::Handrail, "On the Maxi mall stairs", 54.2020, 37.6300, "Maxi mall"),
    (Category::CurbCut, "At Maxi mall", 54.2015, 37.6290, "Oktyabrskaya St"),
    (Category::Handrail, "In the clinic", 54.1920, 37.6200, "Clinic No. 1"),
    (Category::CurbCut, "In front of the clinic", 54.1915, 37.6190, "Pervomayskaya St"),
    (Category::Handrail, "On the pharmacy porch", 54.1890, 37.6180, "Demonstratsii St"),
    (Category::CurbCut, "On Demonstratsii St", 54.1880, 37.6160, "Demonstratsii St"),
    (Category::Handrail, "In the entrance hall", 54.1950, 37.6150, "Leyteyzena St 10"),
    (Category::CurbCut, "At the entrance", 54.1940, 37.6140, "Leyteyzena St"),
    (Category::Handrail, "At the bank", 54.1945, 37.6190, "Lenina Ave 60"),
    (Category::CurbCut, "In front of the bank", 54.1938, 37.6180, "Lenina Ave"),
    (Category::Handrail, "At the shop", 54.1880, 37.6220, "Puzakova St"),
    (Category::CurbCut, "On Puzakova St", 54.1870, 37.6200, "Puzakova St"),
    (Category::Handrail, "On the park trail", 54.1900, 37.6100, "Central Park"),
    (Category::CurbCut, "In the park", 54.1880, 37.6080, "Frunze St"),
];

/// All sample features, wheelchair first, then low-vision, then cane.
pub fn tula_features() -> Vec<NewFeature> {
    WHEELCHAIR
        .iter()
        .chain(LOW_VISION)
        .chain(CANE)
        .map(|&(category, description, lat, lon, address)| {
            NewFeature::new(category, description, lat, lon, address)
        })
        .collect()
}
