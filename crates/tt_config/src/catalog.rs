// crates/tt_config/src/catalog.rs

//! TRENDY 模式/变量/情景目录
//!
//! 固定的普查范围：18 个模式、17 个变量、4 个情景。文件按
//! `{...}_{variable}.nc` 命名约定归属到变量。目录作为显式配置
//! 传入各组件，不做模块级全局状态。

use serde::{Deserialize, Serialize};

/// TRENDY v13 参与模式
pub const MODELS: &[&str] = &[
    "CABLE-POP", "CLASSIC", "CLM5.0", "ED", "ELM", "IBIS", "iMAPLE",
    "JSBACH", "JULES", "LPJ-GUESS", "LPJml", "LPJwsl", "LPX", "OCN",
    "ORCHIDEE", "SDGVM", "VISIT", "VISIT-UT",
];

/// 普查的输出变量
pub const VARIABLES: &[&str] = &[
    "mrso", "mrro", "evapotrans", "evapo", "cVeg", "cLitter",
    "cSoil", "gpp", "ra", "npp", "rh", "fFire", "fLuc", "nbp",
    "landCoverFrac", "burntArea", "lai",
];

/// 模拟情景
pub const SCENARIOS: &[&str] = &["S0", "S1", "S2", "S3"];

/// 普查目录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// 模式名列表
    pub models: Vec<String>,
    /// 变量名列表
    pub variables: Vec<String>,
    /// 情景列表
    pub scenarios: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            models: MODELS.iter().map(|s| s.to_string()).collect(),
            variables: VARIABLES.iter().map(|s| s.to_string()).collect(),
            scenarios: SCENARIOS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Catalog {
    /// 目录是否包含该模式
    pub fn has_model(&self, model: &str) -> bool {
        self.models.iter().any(|m| m == model)
    }

    /// 从文件名解析所属变量
    ///
    /// 命名约定：`{前缀}_{variable}.nc`，变量取最后一个下划线段。
    pub fn variable_of<'a>(&'a self, file_name: &str) -> Option<&'a str> {
        let stem = file_name.strip_suffix(".nc")?;
        let var = stem.rsplit('_').next()?;
        self.variables
            .iter()
            .map(|v| v.as_str())
            .find(|v| *v == var)
    }

    /// 文件是否属于指定变量
    ///
    /// 只认目录中登记的变量，未登记的后缀一律不匹配。
    pub fn matches_variable(&self, file_name: &str, variable: &str) -> bool {
        self.variable_of(file_name) == Some(variable)
    }

    /// 模式/情景组合键，报表列名用
    pub fn column_key(model: &str, scenario: &str) -> String {
        format!("{model}/{scenario}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_sizes() {
        let cat = Catalog::default();
        assert_eq!(cat.models.len(), 18);
        assert_eq!(cat.variables.len(), 17);
        assert_eq!(cat.scenarios.len(), 4);
    }

    #[test]
    fn test_variable_of() {
        let cat = Catalog::default();
        assert_eq!(
            cat.variable_of("CABLE-POP_S3_gpp.nc"),
            Some("gpp")
        );
        assert_eq!(cat.variable_of("JSBACH_S0_cVeg.nc"), Some("cVeg"));
        // 未登记变量
        assert_eq!(cat.variable_of("JSBACH_S0_tas.nc"), None);
        // 不是 .nc
        assert_eq!(cat.variable_of("readme.txt"), None);
    }

    #[test]
    fn test_matches_variable() {
        let cat = Catalog::default();
        assert!(cat.matches_variable("LPX_S1_lai.nc", "lai"));
        assert!(!cat.matches_variable("LPX_S1_lai.nc", "gpp"));
        // landCoverFrac 含大写，按原样匹配
        assert!(cat.matches_variable("OCN_S2_landCoverFrac.nc", "landCoverFrac"));
    }

    #[test]
    fn test_matches_variable_requires_registration() {
        let cat = Catalog::default();
        // tas 不在普查变量清单里，即使后缀吻合也不算匹配
        assert!(!cat.matches_variable("LPX_S1_tas.nc", "tas"));
        assert!(!cat.matches_variable("LPX_S1_tas.txt", "tas"));
    }

    #[test]
    fn test_column_key() {
        assert_eq!(Catalog::column_key("CLM5.0", "S2"), "CLM5.0/S2");
    }

    #[test]
    fn test_has_model() {
        let cat = Catalog::default();
        assert!(cat.has_model("iMAPLE"));
        assert!(!cat.has_model("CESM2"));
    }
}
