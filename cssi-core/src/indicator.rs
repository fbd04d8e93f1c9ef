//! The fixed vocabulary of dataset columns the dashboard can chart.
//!
//! Every dropdown option is an [`Indicator`], so the set of names the UI can
//! ask for is closed at compile time and checked against the loaded table
//! once, in [`crate::Dataset::from_table`].

use crate::error::{CoreError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A named numeric column of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Indicator {
    // COVID-19 (Worldometers)
    Cases,
    Deaths,
    Recovered,

    // SSI indicators
    SufficientFood,
    SafeSanitation,
    Education,
    HealthyLife,
    GenderEquality,
    IncomeDistribution,
    PopulationGrowth,
    GoodGovernance,
    Biodiversity,
    RenewableWaterResources,
    Consumption,
    EnergyUse,
    EnergySavings,
    GreenhouseGases,
    RenewableEnergy,
    OrganicFarming,
    GenuineSavings,
    Gdp,
    Employment,
    PublicDebt,

    // SSI categories
    BasicNeeds,
    PersonalDevelopmentHealth,
    WellBalancedSociety,
    NaturalResources,
    ClimateEnergy,
    Transition,
    Economy,

    // SSI wellbeing dimensions and averages
    HumanWellbeing,
    EnvironmentalWellbeing,
    EconomicWellbeing,
    TotalAverage,
    TotalAverageGdp,
}

use Indicator::*;

/// Case, death and recovery counts.
pub const COVID_METRICS: [Indicator; 3] = [Cases, Deaths, Recovered];

/// SSI indicators and categories, in the order the dropdowns list them.
pub const SSI_INDICATORS: [Indicator; 27] = [
    SufficientFood,
    SafeSanitation,
    Education,
    HealthyLife,
    GenderEquality,
    IncomeDistribution,
    PopulationGrowth,
    GoodGovernance,
    Biodiversity,
    RenewableWaterResources,
    Consumption,
    EnergyUse,
    EnergySavings,
    GreenhouseGases,
    RenewableEnergy,
    OrganicFarming,
    GenuineSavings,
    Gdp,
    Employment,
    PublicDebt,
    BasicNeeds,
    PersonalDevelopmentHealth,
    WellBalancedSociety,
    NaturalResources,
    ClimateEnergy,
    Transition,
    Economy,
];

/// Aggregate wellbeing scores, in wellbeing-dropdown order.
pub const WELLBEING_SCORES: [Indicator; 5] = [
    HumanWellbeing,
    EconomicWellbeing,
    EnvironmentalWellbeing,
    TotalAverage,
    TotalAverageGdp,
];

/// SSI indicators followed by the wellbeing scores, as offered on the
/// combined COVID-19 & sustainability panel.
pub const SSI_AND_WELLBEING: [Indicator; 32] = [
    SufficientFood,
    SafeSanitation,
    Education,
    HealthyLife,
    GenderEquality,
    IncomeDistribution,
    PopulationGrowth,
    GoodGovernance,
    Biodiversity,
    RenewableWaterResources,
    Consumption,
    EnergyUse,
    EnergySavings,
    GreenhouseGases,
    RenewableEnergy,
    OrganicFarming,
    GenuineSavings,
    Gdp,
    Employment,
    PublicDebt,
    BasicNeeds,
    PersonalDevelopmentHealth,
    WellBalancedSociety,
    NaturalResources,
    ClimateEnergy,
    Transition,
    Economy,
    HumanWellbeing,
    EnvironmentalWellbeing,
    EconomicWellbeing,
    TotalAverage,
    TotalAverageGdp,
];

impl Indicator {
    /// Every indicator, COVID metrics first.
    pub const ALL: [Indicator; 35] = [
        Cases,
        Deaths,
        Recovered,
        SufficientFood,
        SafeSanitation,
        Education,
        HealthyLife,
        GenderEquality,
        IncomeDistribution,
        PopulationGrowth,
        GoodGovernance,
        Biodiversity,
        RenewableWaterResources,
        Consumption,
        EnergyUse,
        EnergySavings,
        GreenhouseGases,
        RenewableEnergy,
        OrganicFarming,
        GenuineSavings,
        Gdp,
        Employment,
        PublicDebt,
        BasicNeeds,
        PersonalDevelopmentHealth,
        WellBalancedSociety,
        NaturalResources,
        ClimateEnergy,
        Transition,
        Economy,
        HumanWellbeing,
        EnvironmentalWellbeing,
        EconomicWellbeing,
        TotalAverage,
        TotalAverageGdp,
    ];

    /// The exact CSV header this indicator is read from.
    pub fn column(self) -> &'static str {
        match self {
            Cases => "Cases",
            Deaths => "Deaths",
            Recovered => "Recovered",
            SufficientFood => "Sufficient Food",
            SafeSanitation => "Safe Sanitation",
            Education => "Education",
            HealthyLife => "Healthy Life",
            GenderEquality => "Gender Equality",
            IncomeDistribution => "Income Distribution",
            PopulationGrowth => "Population Growth",
            GoodGovernance => "Good Governance",
            Biodiversity => "Biodiversity",
            RenewableWaterResources => "Renewable Water Resources",
            Consumption => "Consumption",
            EnergyUse => "Energy Use",
            EnergySavings => "Energy Savings",
            GreenhouseGases => "Greenhouse Gases",
            RenewableEnergy => "Renewable Energy",
            OrganicFarming => "Organic Farming",
            GenuineSavings => "Genuine Savings",
            Gdp => "GDP",
            Employment => "Employment",
            PublicDebt => "Public Debt",
            BasicNeeds => "Basic Needs",
            PersonalDevelopmentHealth => "Personal Development & Health",
            WellBalancedSociety => "Well-Balanced Society",
            NaturalResources => "Natural Resources",
            ClimateEnergy => "Climate & Energy",
            // Header spelling in the SSI export.
            Transition => "Transistion",
            Economy => "Economy",
            HumanWellbeing => "Human Wellbeing",
            EnvironmentalWellbeing => "Environmental Wellbeing",
            EconomicWellbeing => "Economic Wellbeing",
            TotalAverage => "Total Average",
            TotalAverageGdp => "Total Average GDP",
        }
    }

    /// Text shown in dropdowns and axis titles.
    pub fn label(self) -> &'static str {
        match self {
            Recovered => "Recoveries",
            Transition => "Transition",
            other => other.column(),
        }
    }

    /// Look up an indicator by its CSV header.
    pub fn from_column(name: &str) -> Option<Indicator> {
        Self::ALL.iter().copied().find(|i| i.column() == name)
    }

    pub fn is_covid_metric(self) -> bool {
        COVID_METRICS.contains(&self)
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Indicator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Indicator::from_column(s.trim()).ok_or_else(|| CoreError::UnknownIndicator(s.to_string()))
    }
}

/// Indicators serialize as their column name, the key charts are drawn from.
impl Serialize for Indicator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn column_names_are_unique() {
        let names: HashSet<&str> = Indicator::ALL.iter().map(|i| i.column()).collect();
        assert_eq!(names.len(), Indicator::ALL.len());
    }

    #[test]
    fn groups_partition_the_vocabulary() {
        let mut grouped: Vec<Indicator> = COVID_METRICS
            .iter()
            .chain(SSI_INDICATORS.iter())
            .chain(WELLBEING_SCORES.iter())
            .copied()
            .collect();
        grouped.sort();
        let mut all = Indicator::ALL.to_vec();
        all.sort();
        assert_eq!(grouped, all);
    }

    #[test]
    fn combined_group_is_ssi_then_wellbeing() {
        assert_eq!(&SSI_AND_WELLBEING[..27], &SSI_INDICATORS[..]);
        let tail: HashSet<Indicator> = SSI_AND_WELLBEING[27..].iter().copied().collect();
        let wellbeing: HashSet<Indicator> = WELLBEING_SCORES.iter().copied().collect();
        assert_eq!(tail, wellbeing);
    }

    #[test]
    fn parse_by_column_name() {
        assert_eq!("GDP".parse::<Indicator>().unwrap(), Gdp);
        assert_eq!("Recovered".parse::<Indicator>().unwrap(), Recovered);
        assert_eq!("Transistion".parse::<Indicator>().unwrap(), Transition);
        assert!(matches!(
            "Recoveries".parse::<Indicator>(),
            Err(CoreError::UnknownIndicator(_))
        ));
    }

    #[test]
    fn labels_differ_from_columns_only_where_renamed() {
        assert_eq!(Recovered.label(), "Recoveries");
        assert_eq!(Transition.label(), "Transition");
        assert_eq!(Gdp.label(), "GDP");
        assert_eq!(Gdp.to_string(), "GDP");
    }

    #[test]
    fn serializes_as_column_name() {
        let json = serde_json::to_string(&vec![Recovered, Transition]).unwrap();
        assert_eq!(json, r#"["Recovered","Transistion"]"#);
    }

    #[test]
    fn covid_metric_membership() {
        assert!(Deaths.is_covid_metric());
        assert!(!Education.is_covid_metric());
    }
}
