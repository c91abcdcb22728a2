//! Synthetic data generation.
//!
//! Locale-randomized fake values for seeding: names, email addresses,
//! postal addresses, country codes, Luhn-valid card numbers and bounded
//! integers. Each call picks a locale independently, so a customer's name,
//! address and country code are deliberately uncorrelated - the point is
//! plausible-looking variety, not consistent personas.

use rand::prelude::*;
use rand::rngs::StdRng;

/// Per-locale word lists and formatting rules
struct LocaleData {
    /// Two-letter uppercase country code
    code: &'static str,
    given: &'static [&'static str],
    family: &'static [&'static str],
    streets: &'static [&'static str],
    cities: &'static [&'static str],
    /// Family name printed before the given name, no separator (zh_CN, ja_JP)
    family_first: bool,
    /// House number printed before the street name (anglophone locales)
    number_first: bool,
}

static LOCALES: &[LocaleData] = &[
    LocaleData {
        code: "US",
        given: &["James", "Mary", "Robert", "Patricia", "Michael", "Jennifer", "David", "Linda"],
        family: &["Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis"],
        streets: &["Main Street", "Oak Avenue", "Maple Drive", "Washington Boulevard"],
        cities: &["Springfield", "Riverside", "Franklin", "Greenville", "Madison", "Clinton"],
        family_first: false,
        number_first: true,
    },
    LocaleData {
        code: "GB",
        given: &["Oliver", "Amelia", "George", "Isla", "Harry", "Emily", "Jack", "Sophie"],
        family: &["Taylor", "Wilson", "Evans", "Thomas", "Roberts", "Walker", "Wright", "Hughes"],
        streets: &["High Street", "Church Lane", "Victoria Road", "Station Road"],
        cities: &["Manchester", "Leeds", "Bristol", "Sheffield", "York", "Brighton"],
        family_first: false,
        number_first: true,
    },
    LocaleData {
        code: "CA",
        given: &["Liam", "Emma", "Noah", "Olivia", "William", "Charlotte", "Benjamin", "Chloe"],
        family: &["Tremblay", "Martin", "Roy", "MacDonald", "Gagnon", "Campbell", "Cote", "Stewart"],
        streets: &["Bay Street", "King Street", "Portage Avenue", "Granville Street"],
        cities: &["Hamilton", "Kitchener", "Halifax", "Victoria", "Regina", "Saskatoon"],
        family_first: false,
        number_first: true,
    },
    LocaleData {
        code: "AU",
        given: &["Jack", "Charlotte", "Oliver", "Mia", "Lachlan", "Ruby", "Cooper", "Matilda"],
        family: &["Nguyen", "Kelly", "Ryan", "Walsh", "Thompson", "White", "Harris", "Martin"],
        streets: &["George Street", "Pitt Street", "Collins Street", "Queen Street"],
        cities: &["Geelong", "Townsville", "Cairns", "Ballarat", "Bendigo", "Newcastle"],
        family_first: false,
        number_first: true,
    },
    LocaleData {
        code: "DE",
        given: &["Lukas", "Anna", "Leon", "Lena", "Finn", "Marie", "Jonas", "Sophia"],
        family: &["Mueller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker"],
        streets: &["Hauptstrasse", "Bahnhofstrasse", "Gartenweg", "Schulstrasse"],
        cities: &["Augsburg", "Wiesbaden", "Bochum", "Kiel", "Mannheim", "Freiburg"],
        family_first: false,
        number_first: false,
    },
    LocaleData {
        code: "NL",
        given: &["Daan", "Emma", "Sem", "Julia", "Lucas", "Sophie", "Levi", "Mila"],
        family: &["de Jong", "Jansen", "de Vries", "van den Berg", "Bakker", "Visser", "Smit", "Meijer"],
        streets: &["Kerkstraat", "Dorpsstraat", "Molenweg", "Stationsweg"],
        cities: &["Utrecht", "Eindhoven", "Tilburg", "Groningen", "Breda", "Nijmegen"],
        family_first: false,
        number_first: false,
    },
    LocaleData {
        code: "FR",
        given: &["Lucas", "Emma", "Hugo", "Lea", "Louis", "Chloe", "Gabriel", "Manon"],
        family: &["Martin", "Bernard", "Dubois", "Petit", "Durand", "Leroy", "Moreau", "Fournier"],
        streets: &["Rue de la Paix", "Rue Victor Hugo", "Avenue de la Gare", "Rue des Ecoles"],
        cities: &["Nantes", "Strasbourg", "Montpellier", "Bordeaux", "Lille", "Rennes"],
        family_first: false,
        number_first: true,
    },
    LocaleData {
        code: "ES",
        given: &["Hugo", "Lucia", "Martin", "Sofia", "Pablo", "Maria", "Alejandro", "Paula"],
        family: &["Garcia", "Rodriguez", "Gonzalez", "Fernandez", "Lopez", "Martinez", "Sanchez", "Perez"],
        streets: &["Calle Mayor", "Calle Real", "Avenida de la Constitucion", "Calle del Sol"],
        cities: &["Zaragoza", "Malaga", "Murcia", "Bilbao", "Alicante", "Cordoba"],
        family_first: false,
        number_first: false,
    },
    LocaleData {
        code: "IT",
        given: &["Francesco", "Sofia", "Alessandro", "Giulia", "Lorenzo", "Aurora", "Matteo", "Alice"],
        family: &["Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo", "Ricci"],
        streets: &["Via Roma", "Via Garibaldi", "Corso Italia", "Via Dante"],
        cities: &["Verona", "Padova", "Trieste", "Brescia", "Parma", "Modena"],
        family_first: false,
        number_first: false,
    },
    LocaleData {
        code: "BR",
        given: &["Miguel", "Alice", "Arthur", "Sophia", "Bernardo", "Helena", "Heitor", "Valentina"],
        family: &["Silva", "Santos", "Oliveira", "Souza", "Lima", "Pereira", "Ferreira", "Costa"],
        streets: &["Rua das Flores", "Avenida Brasil", "Rua XV de Novembro", "Rua Sao Jose"],
        cities: &["Campinas", "Curitiba", "Recife", "Fortaleza", "Belem", "Goiania"],
        family_first: false,
        number_first: false,
    },
    LocaleData {
        code: "CN",
        given: &["伟", "芳", "娜", "敏", "静", "磊", "军", "洋"],
        family: &["王", "李", "张", "刘", "陈", "杨", "黄", "赵"],
        streets: &["人民路", "中山路", "解放路", "建设路"],
        cities: &["成都", "杭州", "武汉", "西安", "南京", "重庆"],
        family_first: true,
        number_first: false,
    },
    LocaleData {
        code: "JP",
        given: &["翔太", "美咲", "大輝", "葵", "陽菜", "蓮", "結衣", "悠真"],
        family: &["佐藤", "鈴木", "高橋", "田中", "伊藤", "渡辺", "山本", "中村"],
        streets: &["桜通り", "本町通り", "中央通り", "駅前通り"],
        cities: &["仙台", "広島", "福岡", "札幌", "神戸", "京都"],
        family_first: true,
        number_first: false,
    },
];

// Only ascii name pools are usable as an email local part
static MAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

fn pick<'a>(rng: &mut StdRng, items: &'a [&'static str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Locale-aware random value generator backed by a seedable RNG.
///
/// All randomness for a seeding run flows through one `Generator`, so a
/// fixed seed reproduces the exact same dataset.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    /// Generator with a fixed seed, for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    fn locale(&mut self) -> &'static LocaleData {
        &LOCALES[self.rng.random_range(0..LOCALES.len())]
    }

    /// A person name in a randomly chosen locale
    pub fn name(&mut self) -> String {
        let locale = self.locale();
        let given = pick(&mut self.rng, locale.given);
        let family = pick(&mut self.rng, locale.family);
        if locale.family_first {
            format!("{family}{given}")
        } else {
            format!("{given} {family}")
        }
    }

    /// An email address with an ascii local part
    pub fn email(&mut self) -> String {
        // local part always drawn from the ascii pools, whatever the locale
        let ascii = &LOCALES[0];
        let given = pick(&mut self.rng, ascii.given).to_lowercase();
        let family = pick(&mut self.rng, ascii.family).to_lowercase();
        let n = self.rng.random_range(1..100u32);
        let domain = pick(&mut self.rng, MAIL_DOMAINS);
        format!("{given}.{family}{n}@{domain}")
    }

    /// A two-line postal address in a randomly chosen locale
    pub fn address(&mut self) -> String {
        let locale = self.locale();
        let number = self.rng.random_range(1..400u32);
        let street = pick(&mut self.rng, locale.streets);
        let city = pick(&mut self.rng, locale.cities);
        let postcode = self.rng.random_range(10000..100000u32);
        if locale.number_first {
            format!("{number} {street}\n{city}, {postcode}")
        } else {
            format!("{street} {number}\n{postcode} {city}")
        }
    }

    /// A two-letter uppercase country code from the locale set
    pub fn country_code(&mut self) -> String {
        self.locale().code.to_string()
    }

    /// A 16-digit Luhn-valid card number
    pub fn credit_card_number(&mut self) -> String {
        // visa/mastercard-style prefix, then random payload, then check digit
        let prefix: &[u8] = if self.rng.random_bool(0.5) { &[4] } else { &[5, 1] };
        let mut digits: Vec<u8> = prefix.to_vec();
        while digits.len() < 15 {
            digits.push(self.rng.random_range(0..10u32) as u8);
        }
        digits.push(luhn_check_digit(&digits));
        digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// A uniform random integer in `[lo, hi]`
    pub fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo..=hi)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Luhn check digit for a card-number payload
fn luhn_check_digit(payload: &[u8]) -> u8 {
    let mut sum = 0u32;
    for (i, d) in payload.iter().rev().enumerate() {
        let mut v = u32::from(*d);
        if i % 2 == 0 {
            v *= 2;
            if v > 9 {
                v -= 9;
            }
        }
        sum += v;
    }
    ((10 - sum % 10) % 10) as u8
}

/// Validate a full card number against the Luhn checksum
pub fn luhn_valid(number: &str) -> bool {
    let digits: Vec<u8> = number.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();
    if digits.len() != number.len() || digits.is_empty() {
        return false;
    }
    let (payload, check) = digits.split_at(digits.len() - 1);
    luhn_check_digit(payload) == check[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_shape() {
        let mut generator = Generator::seeded(1);
        for _ in 0..50 {
            let code = generator.country_code();
            assert_eq!(code.len(), 2);
            assert!(code.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_card_numbers_pass_luhn() {
        let mut generator = Generator::seeded(2);
        for _ in 0..50 {
            let number = generator.credit_card_number();
            assert_eq!(number.len(), 16);
            assert!(luhn_valid(&number), "not Luhn-valid: {number}");
        }
    }

    #[test]
    fn test_luhn_known_values() {
        assert!(luhn_valid("4111111111111111"));
        assert!(luhn_valid("79927398713"));
        assert!(!luhn_valid("4111111111111112"));
        assert!(!luhn_valid(""));
        assert!(!luhn_valid("4111-1111"));
    }

    #[test]
    fn test_email_shape() {
        let mut generator = Generator::seeded(3);
        for _ in 0..20 {
            let email = generator.email();
            assert!(email.is_ascii());
            assert_eq!(email.matches('@').count(), 1);
        }
    }

    #[test]
    fn test_name_within_bound() {
        let mut generator = Generator::seeded(4);
        for _ in 0..100 {
            let name = generator.name();
            assert!(!name.is_empty());
            assert!(name.chars().count() <= crate::model::NAME_MAX);
        }
    }

    #[test]
    fn test_int_in_bounds() {
        let mut generator = Generator::seeded(5);
        for _ in 0..100 {
            let n = generator.int_in(1, 10);
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut a = Generator::seeded(42);
        let mut b = Generator::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.name(), b.name());
            assert_eq!(a.email(), b.email());
            assert_eq!(a.address(), b.address());
            assert_eq!(a.country_code(), b.country_code());
            assert_eq!(a.credit_card_number(), b.credit_card_number());
        }
    }
}
