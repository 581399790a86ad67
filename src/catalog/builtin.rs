//! 組み込みカタログデータ
//!
//! 各カテゴリ2件、計8件のスキームを収録する。

use super::SchemeRecord;

fn scheme(
    id: u32,
    title: &str,
    description: &str,
    eligibility: &[&str],
    benefits: &[&str],
    deadline: Option<&str>,
    category: &str,
    ministry: &str,
    link: &str,
) -> SchemeRecord {
    SchemeRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        eligibility: eligibility.iter().map(|s| s.to_string()).collect(),
        benefits: benefits.iter().map(|s| s.to_string()).collect(),
        deadline: deadline.map(|s| s.to_string()),
        category: category.to_string(),
        ministry: ministry.to_string(),
        link: link.to_string(),
    }
}

/// 組み込みカタログを構築する
///
/// レコードの並び順は表示順としてそのまま使われる。
pub fn builtin_schemes() -> Vec<SchemeRecord> {
    vec![
        // Education
        scheme(
            1,
            "National Scholarship Portal",
            "Central platform for various scholarship schemes provided by central and state governments for students.",
            &[
                "Students from economically weaker sections",
                "Merit-based criteria varies by scholarship",
            ],
            &[
                "Financial assistance for education",
                "Direct transfer to student bank accounts",
            ],
            Some("October 31, 2025"),
            "education",
            "Ministry of Education",
            "https://scholarships.gov.in/",
        ),
        scheme(
            2,
            "Vidyalakshmi Portal",
            "Platform for students seeking educational loans for higher education in India and abroad.",
            &[
                "Students seeking higher education loans",
                "Admission to recognized institutions",
            ],
            &[
                "Single window for education loans from multiple banks",
                "Access to government subsidy schemes",
            ],
            None,
            "education",
            "Ministry of Education",
            "https://www.vidyalakshmi.co.in/",
        ),
        // Health
        scheme(
            3,
            "Ayushman Bharat PM-JAY",
            "Health insurance scheme providing coverage up to ₹5 lakhs per family per year for secondary and tertiary care hospitalization.",
            &[
                "Families identified based on SECC database",
                "Covers up to 5 members per family",
            ],
            &[
                "Cashless hospitalization",
                "Coverage for pre and post hospitalization expenses",
            ],
            None,
            "health",
            "Ministry of Health and Family Welfare",
            "https://pmjay.gov.in/",
        ),
        scheme(
            4,
            "Pradhan Mantri Surakshit Matritva Abhiyan",
            "Provides free health check-ups to pregnant women in their 2nd/3rd trimesters at government facilities.",
            &[
                "Pregnant women in 2nd/3rd trimester",
                "All pregnant women regardless of income",
            ],
            &[
                "Free antenatal check-ups",
                "Treatment and follow-up by specialists",
            ],
            None,
            "health",
            "Ministry of Health and Family Welfare",
            "https://pmsma.nhp.gov.in/",
        ),
        // Agriculture
        scheme(
            5,
            "PM Kisan Samman Nidhi",
            "Income support scheme providing farmers with up to ₹6,000 per year in three equal installments.",
            &[
                "Small and marginal farmer families with cultivable land",
                "Subject to exclusion criteria for higher income groups",
            ],
            &[
                "Direct financial assistance",
                "Funds transferred directly to bank accounts",
            ],
            None,
            "agriculture",
            "Ministry of Agriculture & Farmers Welfare",
            "https://pmkisan.gov.in/",
        ),
        scheme(
            6,
            "Pradhan Mantri Fasal Bima Yojana",
            "Crop insurance scheme to provide financial support to farmers suffering crop loss or damage due to natural calamities.",
            &[
                "All farmers including sharecroppers and tenant farmers",
                "Must grow notified crops",
            ],
            &[
                "Coverage for standing crops",
                "Low premium rates for farmers",
            ],
            Some("Varies by crop season"),
            "agriculture",
            "Ministry of Agriculture & Farmers Welfare",
            "https://pmfby.gov.in/",
        ),
        // Employment
        scheme(
            7,
            "Pradhan Mantri Mudra Yojana",
            "Provides loans up to ₹10 lakhs to non-corporate, non-farm small/micro enterprises.",
            &[
                "Small/micro business owners",
                "Non-corporate, non-farm enterprises",
            ],
            &[
                "Collateral-free loans",
                "Three categories: Shishu, Kishore and Tarun",
            ],
            None,
            "employment",
            "Ministry of Finance",
            "https://www.mudra.org.in/",
        ),
        scheme(
            8,
            "PMKVY (Pradhan Mantri Kaushal Vikas Yojana)",
            "Skill development initiative scheme to enable youth to take up industry-relevant skill training.",
            &[
                "Youth seeking skill development training",
                "Indian citizen, minimum education varies by course",
            ],
            &[
                "Free skill training",
                "Industry-recognized certification",
                "Placement assistance",
            ],
            None,
            "employment",
            "Ministry of Skill Development & Entrepreneurship",
            "https://www.pmkvyofficial.org/",
        ),
    ]
}

#[cfg(test)]
#[path = "builtin_test.rs"]
mod tests;
