//! Unified healthcare product catalog.
//!
//! One data source for every category page, the healthcare landing grid,
//! and the home-page search suggestions. All prices are in the base
//! currency (USD); display conversion happens in one place
//! ([`omniworld_core::pricing`]). Entries that were historically priced
//! in INR have been normalized to the base unit at the standard 83 rate.

use rust_decimal::Decimal;

/// The eight healthcare sub-categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MedicalInstruments,
    Medicines,
    Diagnostic,
    Monitoring,
    Surgical,
    LabEquipment,
    FirstAid,
    Ppe,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 8] = [
        Self::MedicalInstruments,
        Self::Medicines,
        Self::Diagnostic,
        Self::Monitoring,
        Self::Surgical,
        Self::LabEquipment,
        Self::FirstAid,
        Self::Ppe,
    ];

    /// URL slug under `/healthcare/`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::MedicalInstruments => "medical-instruments",
            Self::Medicines => "medicines",
            Self::Diagnostic => "diagnostic",
            Self::Monitoring => "monitoring",
            Self::Surgical => "surgical",
            Self::LabEquipment => "lab-equipment",
            Self::FirstAid => "first-aid",
            Self::Ppe => "ppe",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MedicalInstruments => "Medical Instruments",
            Self::Medicines => "Medicines",
            Self::Diagnostic => "Diagnostic",
            Self::Monitoring => "Monitoring",
            Self::Surgical => "Surgical Tools",
            Self::LabEquipment => "Lab Equipment",
            Self::FirstAid => "First Aid",
            Self::Ppe => "PPE",
        }
    }

    /// Landing-card inventory blurb.
    #[must_use]
    pub const fn count_label(self) -> &'static str {
        match self {
            Self::MedicalInstruments => "450+ Items",
            Self::Medicines => "800+ Items",
            Self::Diagnostic => "320+ Items",
            Self::Monitoring => "280+ Items",
            Self::Surgical => "600+ Items",
            Self::LabEquipment => "150+ Items",
            Self::FirstAid => "200+ Items",
            Self::Ppe => "350+ Items",
        }
    }

    /// Resolve a URL slug; `None` for anything outside the closed set.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// A catalog entry. Prices are unit prices in USD.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Decimal,
    pub category: Category,
    /// Filter tag within the category (e.g. "OTC", "Diagnostic").
    pub group: &'static str,
    pub description: &'static str,
}

/// The full product catalog.
pub struct Catalog {
    products: Vec<Product>,
}

/// Shorthand for building a catalog entry.
fn product(
    id: &'static str,
    name: &'static str,
    cents: i64,
    category: Category,
    group: &'static str,
    description: &'static str,
) -> Product {
    Product {
        id,
        name,
        price: Decimal::new(cents, 2),
        category,
        group,
        description,
    }
}

impl Catalog {
    /// Build the full catalog.
    #[must_use]
    pub fn new() -> Self {
        use Category::{
            Diagnostic, FirstAid, LabEquipment, MedicalInstruments, Medicines, Monitoring, Ppe,
            Surgical,
        };

        let products = vec![
            // Medical instruments
            product(
                "stethoscope-pro",
                "Digital Stethoscope Pro",
                29_999,
                MedicalInstruments,
                "Diagnostic",
                "Electronic stethoscope with noise reduction and recording.",
            ),
            product(
                "bp-monitor-auto",
                "Automated Blood Pressure Monitor",
                15_999,
                MedicalInstruments,
                "Monitoring",
                "Upper-arm monitor with irregular heartbeat detection.",
            ),
            product(
                "otoscope-led",
                "LED Otoscope Set",
                8_999,
                MedicalInstruments,
                "Diagnostic",
                "Fiber-optic otoscope with reusable specula.",
            ),
            product(
                "thermometer-ir",
                "Infrared Thermometer",
                4_599,
                MedicalInstruments,
                "Diagnostic",
                "Non-contact forehead thermometer, one second readout.",
            ),
            product(
                "pulse-oximeter",
                "Pulse Oximeter",
                7_999,
                MedicalInstruments,
                "Monitoring",
                "Fingertip SpO2 and pulse rate with OLED display.",
            ),
            product(
                "surgical-kit-basic",
                "Basic Surgical Kit",
                19_999,
                MedicalInstruments,
                "Surgical",
                "Stainless starter kit for minor procedures.",
            ),
            // Medicines
            product(
                "paracetamol-500",
                "Paracetamol 500mg",
                1_299,
                Medicines,
                "OTC",
                "Pain and fever relief, strip of 100 tablets.",
            ),
            product(
                "ibuprofen-400",
                "Ibuprofen 400mg",
                1_599,
                Medicines,
                "OTC",
                "Anti-inflammatory tablets, pack of 60.",
            ),
            product(
                "vitamin-d3-2000",
                "Vitamin D3 2000 IU",
                2_499,
                Medicines,
                "Supplements",
                "Daily immune and bone support, 120 softgels.",
            ),
            product(
                "omega3-fish-oil",
                "Omega-3 Fish Oil",
                3_299,
                Medicines,
                "Supplements",
                "Triple-strength EPA/DHA, 90 capsules.",
            ),
            product(
                "amoxicillin-500",
                "Amoxicillin 500mg",
                4_599,
                Medicines,
                "Prescription",
                "Broad-spectrum antibiotic, prescription required.",
            ),
            product(
                "cough-syrup-herbal",
                "Herbal Cough Syrup",
                1_899,
                Medicines,
                "Herbal",
                "Honey and tulsi formulation, 200ml bottle.",
            ),
            // Diagnostic
            product(
                "glucometer",
                "Blood Glucose Meter",
                3_999,
                Diagnostic,
                "Meters",
                "Glucometer with 50 strips and lancing device.",
            ),
            product(
                "ecg-portable",
                "Portable ECG Monitor",
                44_999,
                Diagnostic,
                "Cardiac",
                "Six-lead handheld ECG with app sync.",
            ),
            product(
                "urine-strips",
                "Urinalysis Test Strips (100)",
                2_199,
                Diagnostic,
                "Test Kits",
                "Ten-parameter reagent strips.",
            ),
            product(
                "rapid-antigen",
                "Rapid Antigen Test Kit (25)",
                7_499,
                Diagnostic,
                "Test Kits",
                "Point-of-care antigen tests, boxed for clinics.",
            ),
            // Monitoring
            product(
                "bp-cuff-ambulatory",
                "Ambulatory Blood Pressure Cuff",
                12_999,
                Monitoring,
                "Cardiac",
                "24-hour ambulatory cuff with logging.",
            ),
            product(
                "spo2-fingertip",
                "Fingertip SpO2 Monitor",
                4_999,
                Monitoring,
                "Respiratory",
                "Compact oximeter with perfusion index.",
            ),
            product(
                "holter-monitor",
                "48-Hour Holter Monitor",
                89_999,
                Monitoring,
                "Cardiac",
                "Three-channel Holter recorder with analysis software.",
            ),
            product(
                "vitals-monitor-infant",
                "Infant Vitals Monitor",
                19_999,
                Monitoring,
                "Pediatric",
                "Bedside monitor sized for neonatal care.",
            ),
            // Surgical
            product(
                "scalpel-set",
                "Stainless Scalpel Set",
                6_499,
                Surgical,
                "Instruments",
                "Handles and 30 sterile blades, autoclavable.",
            ),
            product(
                "forceps-assorted",
                "Assorted Forceps Pack",
                3_999,
                Surgical,
                "Instruments",
                "Tissue, dressing, and artery forceps.",
            ),
            product(
                "suture-kit",
                "Suture Practice Kit",
                8_999,
                Surgical,
                "Consumables",
                "Training pad with assorted suture threads.",
            ),
            product(
                "surgical-drapes",
                "Sterile Surgical Drapes (20)",
                5_499,
                Surgical,
                "Consumables",
                "Single-use fenestrated drapes.",
            ),
            // Lab equipment
            product(
                "microscope-binocular",
                "Binocular Lab Microscope",
                54_999,
                LabEquipment,
                "Optics",
                "1000x binocular microscope with LED illumination.",
            ),
            product(
                "centrifuge-benchtop",
                "Benchtop Centrifuge",
                129_999,
                LabEquipment,
                "Machines",
                "Eight-place fixed-angle rotor, 4000 rpm.",
            ),
            product(
                "pipette-set",
                "Adjustable Pipette Set",
                15_999,
                LabEquipment,
                "Consumables",
                "Four-volume micropipette set with stand.",
            ),
            product(
                "lab-glassware",
                "Borosilicate Glassware Set",
                8_999,
                LabEquipment,
                "Consumables",
                "Beakers, flasks, and cylinders for general lab work.",
            ),
            // First aid (normalized from INR pricing at the 83 rate)
            product(
                "first-aid-kit",
                "Comprehensive First Aid Kit",
                5_422,
                FirstAid,
                "Kits",
                "Clinic-grade kit for up to 50 people.",
            ),
            product(
                "bandage-pack",
                "Emergency Bandage Pack",
                1_446,
                FirstAid,
                "Supplies",
                "Compression and triangular bandages, mixed sizes.",
            ),
            product(
                "antiseptic-set",
                "Antiseptic Solution Set",
                1_024,
                FirstAid,
                "Supplies",
                "Povidone-iodine and chlorhexidine solutions.",
            ),
            product(
                "splint-kit",
                "Emergency Splint Kit",
                3_012,
                FirstAid,
                "Kits",
                "Moldable splints with fastening wraps.",
            ),
            // PPE
            product(
                "surgical-masks-50",
                "Surgical Mask Pack (50pcs)",
                1_927,
                Ppe,
                "Masks",
                "Three-ply masks, fluid resistant.",
            ),
            product(
                "n95-respirators-20",
                "N95 Respirator Pack (20)",
                3_499,
                Ppe,
                "Masks",
                "NIOSH-approved respirators, individually sealed.",
            ),
            product(
                "nitrile-gloves-100",
                "Nitrile Gloves (100)",
                2_499,
                Ppe,
                "Gloves",
                "Powder-free examination gloves.",
            ),
            product(
                "face-shield-10",
                "Face Shield Pack (10)",
                2_999,
                Ppe,
                "Face Protection",
                "Anti-fog full-face shields.",
            ),
            product(
                "isolation-gowns-10",
                "Isolation Gown Pack (10)",
                4_499,
                Ppe,
                "Gowns",
                "Level 2 fluid-resistant gowns.",
            ),
        ];

        Self { products }
    }

    /// All products.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Find a product by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products belonging to `category`, in catalog order.
    #[must_use]
    pub fn in_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Distinct group tags within `category`, with product counts.
    #[must_use]
    pub fn groups(&self, category: Category) -> Vec<(&'static str, usize)> {
        let mut groups: Vec<(&'static str, usize)> = Vec::new();
        for item in self.products.iter().filter(|p| p.category == category) {
            if let Some(entry) = groups.iter_mut().find(|(g, _)| *g == item.group) {
                entry.1 += 1;
            } else {
                groups.push((item.group, 1));
            }
        }
        groups
    }

    /// Case-insensitive substring search over name, category, and group.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.category.name().to_lowercase().contains(&query)
                    || p.group.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Hand-picked products for the healthcare landing grid.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        const FEATURED_IDS: [&str; 6] = [
            "bp-monitor-auto",
            "paracetamol-500",
            "thermometer-ir",
            "surgical-masks-50",
            "pulse-oximeter",
            "vitamin-d3-2000",
        ];

        FEATURED_IDS.iter().filter_map(|id| self.find(id)).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_products() {
        let catalog = Catalog::new();
        for category in Category::ALL {
            assert!(
                !catalog.in_category(category).is_empty(),
                "no products in {}",
                category.name()
            );
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::new();
        let mut ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.products().len());
    }

    #[test]
    fn test_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("toys"), None);
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.find("paracetamol-500").unwrap().name,
            "Paracetamol 500mg"
        );
        assert!(catalog.find("nope").is_none());
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let catalog = Catalog::new();
        let hits = catalog.search("MASK");
        assert!(hits.iter().any(|p| p.id == "surgical-masks-50"));
    }

    #[test]
    fn test_search_matches_category_and_group() {
        let catalog = Catalog::new();
        assert!(!catalog.search("first aid").is_empty());
        assert!(!catalog.search("otc").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn test_groups_count() {
        let catalog = Catalog::new();
        let groups = catalog.groups(Category::Medicines);
        let otc = groups.iter().find(|(g, _)| *g == "OTC").unwrap();
        assert_eq!(otc.1, 2);
    }

    #[test]
    fn test_featured_resolves() {
        let catalog = Catalog::new();
        assert_eq!(catalog.featured().len(), 6);
    }
}
