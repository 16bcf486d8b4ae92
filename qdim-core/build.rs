use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let out_dir = env::var("OUT_DIR").unwrap();

    // Re-run if units.csv changes
    println!("cargo:rerun-if-changed=units.csv");
    println!("cargo:rerun-if-changed=build.rs");

    // Parse units from CSV, grouped by module
    let modules = parse_units_csv(&crate_dir);

    let units_dir = PathBuf::from(&out_dir).join("units");
    fs::create_dir_all(&units_dir).expect("Failed to create units output directory");

    for (module, units) in &modules {
        let code = generate_module(units);
        let dest_path = units_dir.join(format!("{module}.rs"));
        fs::write(&dest_path, code)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", dest_path.display()));
    }
}

#[derive(Debug, Clone)]
struct UnitDef {
    dimension: String,
    type_name: String,
    plural: String,
    name: String,
    symbol: String,
    num: i64,
    den: i64,
    exp: i32,
}

impl UnitDef {
    fn value(&self) -> f64 {
        self.num as f64 / self.den as f64 * 10f64.powi(self.exp)
    }
}

fn parse_units_csv(crate_dir: &str) -> BTreeMap<String, Vec<UnitDef>> {
    let csv_path = PathBuf::from(crate_dir).join("units.csv");
    let content = fs::read_to_string(&csv_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", csv_path.display()));

    let mut modules: BTreeMap<String, Vec<UnitDef>> = BTreeMap::new();

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();

        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() != 9 {
            println!("cargo:warning=units.csv:{}: expected 9 columns, skipping: {}", number + 1, line);
            continue;
        }

        let (Ok(num), Ok(den), Ok(exp)) = (parts[6].parse(), parts[7].parse(), parts[8].parse()) else {
            println!("cargo:warning=units.csv:{}: invalid ratio, skipping: {}", number + 1, line);
            continue;
        };
        if num == 0 || den == 0 {
            println!("cargo:warning=units.csv:{}: ratio must be non-zero, skipping: {}", number + 1, line);
            continue;
        }

        let units = modules.entry(parts[0].to_string()).or_default();
        if units.iter().any(|u| u.type_name == parts[2]) {
            println!("cargo:warning=units.csv:{}: duplicate unit {}, skipping", number + 1, parts[2]);
            continue;
        }

        units.push(UnitDef {
            dimension: parts[1].to_string(),
            type_name: parts[2].to_string(),
            plural: parts[3].to_string(),
            name: parts[4].to_string(),
            symbol: parts[5].to_string(),
            num,
            den,
            exp,
        });
    }

    modules
}

fn ratio_doc(unit: &UnitDef) -> String {
    let mut ratio = unit.num.to_string();
    if unit.den != 1 {
        ratio.push_str(&format!("/{}", unit.den));
    }
    if unit.exp != 0 {
        ratio.push_str(&format!("·10^{}", unit.exp));
    }
    ratio
}

fn generate_module(units: &[UnitDef]) -> String {
    let mut code = String::from("// Auto-generated from units.csv\n\n");

    for unit in units {
        let mut title = unit.name.clone();
        if let Some(first) = title.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        code.push_str(&format!("/// {} (ratio `{}`).\n", title, ratio_doc(unit)));
        code.push_str("#[derive(Clone, Copy, Debug, PartialEq, Unit)]\n");
        code.push_str(&format!(
            "#[unit(symbol = {:?}, dimension = {}, ratio = ({}, {}, {}), name = {:?})]\n",
            unit.symbol, unit.dimension, unit.num, unit.den, unit.exp, unit.name
        ));
        code.push_str(&format!("pub struct {};\n", unit.type_name));
        code.push_str(&format!("/// A quantity measured in [`{}`].\n", unit.type_name));
        code.push_str(&format!(
            "pub type {}<R = f64> = Quantity<{}, R>;\n\n",
            unit.plural, unit.type_name
        ));
    }

    // Registry table, in file order
    code.push_str("/// Registry entries for this module, in declaration order.\n");
    code.push_str("pub(crate) const UNITS: &[UnitEntry] = &[\n");
    for unit in units {
        code.push_str(&format!("    UnitEntry::of::<{}>(),\n", unit.type_name));
    }
    code.push_str("];\n\n");

    // Cross-unit relations, finest first
    let mut sorted: Vec<&UnitDef> = units.iter().collect();
    sorted.sort_by(|a, b| a.value().total_cmp(&b.value()));
    code.push_str("crate::impl_unit_relations!(\n");
    for unit in sorted {
        code.push_str(&format!("    {},\n", unit.type_name));
    }
    code.push_str(");\n");

    code
}
