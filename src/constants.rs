use num_enum::{IntoPrimitive, TryFromPrimitive};

pub(crate) const CHALAKIM_PER_MINUTE: i64 = 18;
pub(crate) const CHALAKIM_PER_HOUR: i64 = 1080;
pub(crate) const CHALAKIM_PER_DAY: i64 = 25920; // 24 * 1080
pub(crate) const CHALAKIM_PER_MONTH: i64 = 765433; // (29 * 24 + 12) * 1080 + 793
/// Chalakim from the beginning of Sunday till molad BaHaRaD.
pub(crate) const CHALAKIM_MOLAD_TOHU: i64 = 31524;
/// Absolute-day offset of the Hebrew epoch. Day 1 is 1 Jan, 1 CE.
pub(crate) const HEBREW_EPOCH_OFFSET: i32 = -1373429;

/// The months of the Hebrew year, numbered from Nissan as the calendar does
/// for counting months, even though the year number changes in Tishrei.
///
/// In a non-leap year month 12 is Adar and month 13 does not exist. In a
/// leap year month 12 is Adar I and month 13 is Adar II.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum HebrewMonth {
    Nissan = 1,
    Iyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Teves = 10,
    Shevat = 11,
    Adar = 12,
    AdarII = 13,
}

impl HebrewMonth {
    pub fn en_string(&self, is_leap_year: bool) -> &'static str {
        match self {
            HebrewMonth::Nissan => "Nissan",
            HebrewMonth::Iyar => "Iyar",
            HebrewMonth::Sivan => "Sivan",
            HebrewMonth::Tammuz => "Tammuz",
            HebrewMonth::Av => "Av",
            HebrewMonth::Elul => "Elul",
            HebrewMonth::Tishrei => "Tishrei",
            HebrewMonth::Cheshvan => "Cheshvan",
            HebrewMonth::Kislev => "Kislev",
            HebrewMonth::Teves => "Teves",
            HebrewMonth::Shevat => "Shevat",
            HebrewMonth::Adar => {
                if is_leap_year {
                    "Adar I"
                } else {
                    "Adar"
                }
            }
            HebrewMonth::AdarII => "Adar II",
        }
    }

    pub fn he_string(&self, is_leap_year: bool) -> &'static str {
        match self {
            HebrewMonth::Nissan => "ניסן",
            HebrewMonth::Iyar => "אייר",
            HebrewMonth::Sivan => "סיון",
            HebrewMonth::Tammuz => "תמוז",
            HebrewMonth::Av => "אב",
            HebrewMonth::Elul => "אלול",
            HebrewMonth::Tishrei => "תשרי",
            HebrewMonth::Cheshvan => "חשון",
            HebrewMonth::Kislev => "כסלו",
            HebrewMonth::Teves => "טבת",
            HebrewMonth::Shevat => "שבט",
            HebrewMonth::Adar => {
                if is_leap_year {
                    "אדר א"
                } else {
                    "אדר"
                }
            }
            HebrewMonth::AdarII => "אדר ב",
        }
    }
}

/// Day of the week with Sunday = 1 and Shabbos = 7.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Shabbos = 7,
}

impl Weekday {
    pub fn en_string(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Shabbos => "Shabbos",
        }
    }

    pub fn he_string(&self) -> &'static str {
        match self {
            Weekday::Sunday => "ראשון",
            Weekday::Monday => "שני",
            Weekday::Tuesday => "שלישי",
            Weekday::Wednesday => "רביעי",
            Weekday::Thursday => "חמישי",
            Weekday::Friday => "שישי",
            Weekday::Shabbos => "שבת",
        }
    }
}

/// The kviah of a year, fixed by the combined lengths of Cheshvan and Kislev.
#[derive(Debug, PartialEq, Eq, Clone, Copy, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Kviah {
    /// Cheshvan and Kislev both 29 days.
    Chaseirim = 0,
    /// Cheshvan 29 days and Kislev 30 days.
    Kesidran = 1,
    /// Cheshvan and Kislev both 30 days.
    Shleimim = 2,
}

impl Kviah {
    pub fn en_string(&self) -> &'static str {
        match self {
            Kviah::Chaseirim => "Chaseirim",
            Kviah::Kesidran => "Kesidran",
            Kviah::Shleimim => "Shleimim",
        }
    }

    pub fn he_string(&self) -> &'static str {
        match self {
            Kviah::Chaseirim => "חסרים",
            Kviah::Kesidran => "כסדרן",
            Kviah::Shleimim => "שלמים",
        }
    }
}

/// Holidays, fasts and commemorations recognized by the event classifier.
#[derive(Debug, PartialEq, Eq, Clone, Copy, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Holiday {
    ErevPesach = 0,
    Pesach = 1,
    CholHamoedPesach = 2,
    PesachSheni = 3,
    ErevShavuos = 4,
    Shavuos = 5,
    SeventeenOfTammuz = 6,
    TishaBeav = 7,
    TuBeav = 8,
    ErevRoshHashana = 9,
    RoshHashana = 10,
    FastOfGedalyah = 11,
    ErevYomKippur = 12,
    YomKippur = 13,
    ErevSuccos = 14,
    Succos = 15,
    CholHamoedSuccos = 16,
    HoshanaRabba = 17,
    SheminiAtzeres = 18,
    SimchasTorah = 19,
    ErevChanukah = 20,
    Chanukah = 21,
    TenthOfTeves = 22,
    TuBeshvat = 23,
    FastOfEsther = 24,
    Purim = 25,
    ShushanPurim = 26,
    PurimKatan = 27,
    RoshChodesh = 28,
    YomHashoah = 29,
    YomHazikaron = 30,
    YomHaatzmaut = 31,
    YomYerushalayim = 32,
    LagBaomer = 33,
}

impl Holiday {
    pub fn en_string(&self) -> &'static str {
        match self {
            Holiday::ErevPesach => "Erev Pesach",
            Holiday::Pesach => "Pesach",
            Holiday::CholHamoedPesach => "Chol Hamoed Pesach",
            Holiday::PesachSheni => "Pesach Sheni",
            Holiday::ErevShavuos => "Erev Shavuos",
            Holiday::Shavuos => "Shavuos",
            Holiday::SeventeenOfTammuz => "Seventeenth of Tammuz",
            Holiday::TishaBeav => "Tishah B'Av",
            Holiday::TuBeav => "Tu B'Av",
            Holiday::ErevRoshHashana => "Erev Rosh Hashana",
            Holiday::RoshHashana => "Rosh Hashana",
            Holiday::FastOfGedalyah => "Fast of Gedalyah",
            Holiday::ErevYomKippur => "Erev Yom Kippur",
            Holiday::YomKippur => "Yom Kippur",
            Holiday::ErevSuccos => "Erev Succos",
            Holiday::Succos => "Succos",
            Holiday::CholHamoedSuccos => "Chol Hamoed Succos",
            Holiday::HoshanaRabba => "Hoshana Rabbah",
            Holiday::SheminiAtzeres => "Shemini Atzeres",
            Holiday::SimchasTorah => "Simchas Torah",
            Holiday::ErevChanukah => "Erev Chanukah",
            Holiday::Chanukah => "Chanukah",
            Holiday::TenthOfTeves => "Tenth of Teves",
            Holiday::TuBeshvat => "Tu B'Shvat",
            Holiday::FastOfEsther => "Fast of Esther",
            Holiday::Purim => "Purim",
            Holiday::ShushanPurim => "Shushan Purim",
            Holiday::PurimKatan => "Purim Katan",
            Holiday::RoshChodesh => "Rosh Chodesh",
            Holiday::YomHashoah => "Yom HaShoah",
            Holiday::YomHazikaron => "Yom Hazikaron",
            Holiday::YomHaatzmaut => "Yom Ha'atzmaut",
            Holiday::YomYerushalayim => "Yom Yerushalayim",
            Holiday::LagBaomer => "Lag BaOmer",
        }
    }

    pub fn he_string(&self) -> &'static str {
        match self {
            Holiday::ErevPesach => "ערב פסח",
            Holiday::Pesach => "פסח",
            Holiday::CholHamoedPesach => "חול המועד פסח",
            Holiday::PesachSheni => "פסח שני",
            Holiday::ErevShavuos => "ערב שבועות",
            Holiday::Shavuos => "שבועות",
            Holiday::SeventeenOfTammuz => "שבעה עשר בתמוז",
            Holiday::TishaBeav => "תשעה באב",
            Holiday::TuBeav => "ט״ו באב",
            Holiday::ErevRoshHashana => "ערב ראש השנה",
            Holiday::RoshHashana => "ראש השנה",
            Holiday::FastOfGedalyah => "צום גדליה",
            Holiday::ErevYomKippur => "ערב יום כיפור",
            Holiday::YomKippur => "יום כיפור",
            Holiday::ErevSuccos => "ערב סוכות",
            Holiday::Succos => "סוכות",
            Holiday::CholHamoedSuccos => "חול המועד סוכות",
            Holiday::HoshanaRabba => "הושענא רבה",
            Holiday::SheminiAtzeres => "שמיני עצרת",
            Holiday::SimchasTorah => "שמחת תורה",
            Holiday::ErevChanukah => "ערב חנוכה",
            Holiday::Chanukah => "חנוכה",
            Holiday::TenthOfTeves => "עשרה בטבת",
            Holiday::TuBeshvat => "ט״ו בשבט",
            Holiday::FastOfEsther => "תענית אסתר",
            Holiday::Purim => "פורים",
            Holiday::ShushanPurim => "שושן פורים",
            Holiday::PurimKatan => "פורים קטן",
            Holiday::RoshChodesh => "ראש חודש",
            Holiday::YomHashoah => "יום השואה",
            Holiday::YomHazikaron => "יום הזיכרון",
            Holiday::YomHaatzmaut => "יום העצמאות",
            Holiday::YomYerushalayim => "יום ירושלים",
            Holiday::LagBaomer => "ל״ג בעומר",
        }
    }
}

/// The weekly Torah readings. Indices 0 through 53 are the single parshiyos
/// in order; the remaining entries are the doubled readings used in years
/// where two parshiyos share a Shabbos.
#[derive(Debug, PartialEq, Eq, Clone, Copy, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Parsha {
    Bereshis = 0,
    Noach = 1,
    LechLecha = 2,
    Vayera = 3,
    ChayeiSara = 4,
    Toldos = 5,
    Vayetzei = 6,
    Vayishlach = 7,
    Vayeshev = 8,
    Miketz = 9,
    Vayigash = 10,
    Vayechi = 11,
    Shemos = 12,
    Vaera = 13,
    Bo = 14,
    Beshalach = 15,
    Yisro = 16,
    Mishpatim = 17,
    Terumah = 18,
    Tetzaveh = 19,
    KiSisa = 20,
    Vayakhel = 21,
    Pekudei = 22,
    Vayikra = 23,
    Tzav = 24,
    Shmini = 25,
    Tazria = 26,
    Metzora = 27,
    AchreiMos = 28,
    Kedoshim = 29,
    Emor = 30,
    Behar = 31,
    Bechukosai = 32,
    Bamidbar = 33,
    Nasso = 34,
    Behaaloscha = 35,
    Shlach = 36,
    Korach = 37,
    Chukas = 38,
    Balak = 39,
    Pinchas = 40,
    Matos = 41,
    Masei = 42,
    Devarim = 43,
    Vaeschanan = 44,
    Eikev = 45,
    Reeh = 46,
    Shoftim = 47,
    KiSeitzei = 48,
    KiSavo = 49,
    Nitzavim = 50,
    Vayeilech = 51,
    HaAzinu = 52,
    VezosHabracha = 53,
    VayakhelPekudei = 54,
    TazriaMetzora = 55,
    AchreiMosKedoshim = 56,
    BeharBechukosai = 57,
    ChukasBalak = 58,
    MatosMasei = 59,
    NitzavimVayeilech = 60,
}

impl Parsha {
    pub fn en_string(&self) -> &'static str {
        match self {
            Parsha::Bereshis => "Bereshis",
            Parsha::Noach => "Noach",
            Parsha::LechLecha => "Lech Lecha",
            Parsha::Vayera => "Vayera",
            Parsha::ChayeiSara => "Chayei Sara",
            Parsha::Toldos => "Toldos",
            Parsha::Vayetzei => "Vayetzei",
            Parsha::Vayishlach => "Vayishlach",
            Parsha::Vayeshev => "Vayeshev",
            Parsha::Miketz => "Miketz",
            Parsha::Vayigash => "Vayigash",
            Parsha::Vayechi => "Vayechi",
            Parsha::Shemos => "Shemos",
            Parsha::Vaera => "Vaera",
            Parsha::Bo => "Bo",
            Parsha::Beshalach => "Beshalach",
            Parsha::Yisro => "Yisro",
            Parsha::Mishpatim => "Mishpatim",
            Parsha::Terumah => "Terumah",
            Parsha::Tetzaveh => "Tetzaveh",
            Parsha::KiSisa => "Ki Sisa",
            Parsha::Vayakhel => "Vayakhel",
            Parsha::Pekudei => "Pekudei",
            Parsha::Vayikra => "Vayikra",
            Parsha::Tzav => "Tzav",
            Parsha::Shmini => "Shmini",
            Parsha::Tazria => "Tazria",
            Parsha::Metzora => "Metzora",
            Parsha::AchreiMos => "Achrei Mos",
            Parsha::Kedoshim => "Kedoshim",
            Parsha::Emor => "Emor",
            Parsha::Behar => "Behar",
            Parsha::Bechukosai => "Bechukosai",
            Parsha::Bamidbar => "Bamidbar",
            Parsha::Nasso => "Nasso",
            Parsha::Behaaloscha => "Beha'aloscha",
            Parsha::Shlach => "Sh'lach",
            Parsha::Korach => "Korach",
            Parsha::Chukas => "Chukas",
            Parsha::Balak => "Balak",
            Parsha::Pinchas => "Pinchas",
            Parsha::Matos => "Matos",
            Parsha::Masei => "Masei",
            Parsha::Devarim => "Devarim",
            Parsha::Vaeschanan => "Vaeschanan",
            Parsha::Eikev => "Eikev",
            Parsha::Reeh => "Re'eh",
            Parsha::Shoftim => "Shoftim",
            Parsha::KiSeitzei => "Ki Seitzei",
            Parsha::KiSavo => "Ki Savo",
            Parsha::Nitzavim => "Nitzavim",
            Parsha::Vayeilech => "Vayeilech",
            Parsha::HaAzinu => "Ha'Azinu",
            Parsha::VezosHabracha => "Vezos Habracha",
            Parsha::VayakhelPekudei => "Vayakhel Pekudei",
            Parsha::TazriaMetzora => "Tazria Metzora",
            Parsha::AchreiMosKedoshim => "Achrei Mos Kedoshim",
            Parsha::BeharBechukosai => "Behar Bechukosai",
            Parsha::ChukasBalak => "Chukas Balak",
            Parsha::MatosMasei => "Matos Masei",
            Parsha::NitzavimVayeilech => "Nitzavim Vayeilech",
        }
    }

    pub fn he_string(&self) -> &'static str {
        match self {
            Parsha::Bereshis => "בראשית",
            Parsha::Noach => "נח",
            Parsha::LechLecha => "לך לך",
            Parsha::Vayera => "וירא",
            Parsha::ChayeiSara => "חיי שרה",
            Parsha::Toldos => "תולדות",
            Parsha::Vayetzei => "ויצא",
            Parsha::Vayishlach => "וישלח",
            Parsha::Vayeshev => "וישב",
            Parsha::Miketz => "מקץ",
            Parsha::Vayigash => "ויגש",
            Parsha::Vayechi => "ויחי",
            Parsha::Shemos => "שמות",
            Parsha::Vaera => "וארא",
            Parsha::Bo => "בא",
            Parsha::Beshalach => "בשלח",
            Parsha::Yisro => "יתרו",
            Parsha::Mishpatim => "משפטים",
            Parsha::Terumah => "תרומה",
            Parsha::Tetzaveh => "תצוה",
            Parsha::KiSisa => "כי תשא",
            Parsha::Vayakhel => "ויקהל",
            Parsha::Pekudei => "פקודי",
            Parsha::Vayikra => "ויקרא",
            Parsha::Tzav => "צו",
            Parsha::Shmini => "שמיני",
            Parsha::Tazria => "תזריע",
            Parsha::Metzora => "מצרע",
            Parsha::AchreiMos => "אחרי מות",
            Parsha::Kedoshim => "קדושים",
            Parsha::Emor => "אמור",
            Parsha::Behar => "בהר",
            Parsha::Bechukosai => "בחקתי",
            Parsha::Bamidbar => "במדבר",
            Parsha::Nasso => "נשא",
            Parsha::Behaaloscha => "בהעלתך",
            Parsha::Shlach => "שלח לך",
            Parsha::Korach => "קרח",
            Parsha::Chukas => "חוקת",
            Parsha::Balak => "בלק",
            Parsha::Pinchas => "פינחס",
            Parsha::Matos => "מטות",
            Parsha::Masei => "מסעי",
            Parsha::Devarim => "דברים",
            Parsha::Vaeschanan => "ואתחנן",
            Parsha::Eikev => "עקב",
            Parsha::Reeh => "ראה",
            Parsha::Shoftim => "שופטים",
            Parsha::KiSeitzei => "כי תצא",
            Parsha::KiSavo => "כי תבוא",
            Parsha::Nitzavim => "נצבים",
            Parsha::Vayeilech => "וילך",
            Parsha::HaAzinu => "האזינו",
            Parsha::VezosHabracha => "וזאת הברכה",
            Parsha::VayakhelPekudei => "ויקהל פקודי",
            Parsha::TazriaMetzora => "תזריע מצרע",
            Parsha::AchreiMosKedoshim => "אחרי מות קדושים",
            Parsha::BeharBechukosai => "בהר בחקתי",
            Parsha::ChukasBalak => "חוקת בלק",
            Parsha::MatosMasei => "מטות מסעי",
            Parsha::NitzavimVayeilech => "נצבים וילך",
        }
    }
}

/// The tractates of the Babylonian Talmud in Daf Yomi order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum BavliTractate {
    Berachos = 0,
    Shabbos = 1,
    Eruvin = 2,
    Pesachim = 3,
    Shekalim = 4,
    Yoma = 5,
    Sukkah = 6,
    Beitzah = 7,
    RoshHashana = 8,
    Taanis = 9,
    Megillah = 10,
    MoedKatan = 11,
    Chagigah = 12,
    Yevamos = 13,
    Kesubos = 14,
    Nedarim = 15,
    Nazir = 16,
    Sotah = 17,
    Gitin = 18,
    Kiddushin = 19,
    BavaKamma = 20,
    BavaMetzia = 21,
    BavaBasra = 22,
    Sanhedrin = 23,
    Makkos = 24,
    Shevuos = 25,
    AvodahZarah = 26,
    Horiyos = 27,
    Zevachim = 28,
    Menachos = 29,
    Chullin = 30,
    Bechoros = 31,
    Arachin = 32,
    Temurah = 33,
    Kerisos = 34,
    Meilah = 35,
    Kinnim = 36,
    Tamid = 37,
    Midos = 38,
    Niddah = 39,
}

impl BavliTractate {
    pub fn en_string(&self) -> &'static str {
        match self {
            BavliTractate::Berachos => "Berachos",
            BavliTractate::Shabbos => "Shabbos",
            BavliTractate::Eruvin => "Eruvin",
            BavliTractate::Pesachim => "Pesachim",
            BavliTractate::Shekalim => "Shekalim",
            BavliTractate::Yoma => "Yoma",
            BavliTractate::Sukkah => "Sukkah",
            BavliTractate::Beitzah => "Beitzah",
            BavliTractate::RoshHashana => "Rosh Hashana",
            BavliTractate::Taanis => "Taanis",
            BavliTractate::Megillah => "Megillah",
            BavliTractate::MoedKatan => "Moed Katan",
            BavliTractate::Chagigah => "Chagigah",
            BavliTractate::Yevamos => "Yevamos",
            BavliTractate::Kesubos => "Kesubos",
            BavliTractate::Nedarim => "Nedarim",
            BavliTractate::Nazir => "Nazir",
            BavliTractate::Sotah => "Sotah",
            BavliTractate::Gitin => "Gitin",
            BavliTractate::Kiddushin => "Kiddushin",
            BavliTractate::BavaKamma => "Bava Kamma",
            BavliTractate::BavaMetzia => "Bava Metzia",
            BavliTractate::BavaBasra => "Bava Basra",
            BavliTractate::Sanhedrin => "Sanhedrin",
            BavliTractate::Makkos => "Makkos",
            BavliTractate::Shevuos => "Shevuos",
            BavliTractate::AvodahZarah => "Avodah Zarah",
            BavliTractate::Horiyos => "Horiyos",
            BavliTractate::Zevachim => "Zevachim",
            BavliTractate::Menachos => "Menachos",
            BavliTractate::Chullin => "Chullin",
            BavliTractate::Bechoros => "Bechoros",
            BavliTractate::Arachin => "Arachin",
            BavliTractate::Temurah => "Temurah",
            BavliTractate::Kerisos => "Kerisos",
            BavliTractate::Meilah => "Meilah",
            BavliTractate::Kinnim => "Kinnim",
            BavliTractate::Tamid => "Tamid",
            BavliTractate::Midos => "Midos",
            BavliTractate::Niddah => "Niddah",
        }
    }

    pub fn he_string(&self) -> &'static str {
        match self {
            BavliTractate::Berachos => "ברכות",
            BavliTractate::Shabbos => "שבת",
            BavliTractate::Eruvin => "עירובין",
            BavliTractate::Pesachim => "פסחים",
            BavliTractate::Shekalim => "שקלים",
            BavliTractate::Yoma => "יומא",
            BavliTractate::Sukkah => "סוכה",
            BavliTractate::Beitzah => "ביצה",
            BavliTractate::RoshHashana => "ראש השנה",
            BavliTractate::Taanis => "תענית",
            BavliTractate::Megillah => "מגילה",
            BavliTractate::MoedKatan => "מועד קטן",
            BavliTractate::Chagigah => "חגיגה",
            BavliTractate::Yevamos => "יבמות",
            BavliTractate::Kesubos => "כתובות",
            BavliTractate::Nedarim => "נדרים",
            BavliTractate::Nazir => "נזיר",
            BavliTractate::Sotah => "סוטה",
            BavliTractate::Gitin => "גיטין",
            BavliTractate::Kiddushin => "קידושין",
            BavliTractate::BavaKamma => "בבא קמא",
            BavliTractate::BavaMetzia => "בבא מציעא",
            BavliTractate::BavaBasra => "בבא בתרא",
            BavliTractate::Sanhedrin => "סנהדרין",
            BavliTractate::Makkos => "מכות",
            BavliTractate::Shevuos => "שבועות",
            BavliTractate::AvodahZarah => "עבודה זרה",
            BavliTractate::Horiyos => "הוריות",
            BavliTractate::Zevachim => "זבחים",
            BavliTractate::Menachos => "מנחות",
            BavliTractate::Chullin => "חולין",
            BavliTractate::Bechoros => "בכורות",
            BavliTractate::Arachin => "ערכין",
            BavliTractate::Temurah => "תמורה",
            BavliTractate::Kerisos => "כריתות",
            BavliTractate::Meilah => "מעילה",
            BavliTractate::Kinnim => "קינים",
            BavliTractate::Tamid => "תמיד",
            BavliTractate::Midos => "מידות",
            BavliTractate::Niddah => "נדה",
        }
    }
}
