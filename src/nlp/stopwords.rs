//! Romanian stopword list.
//!
//! Function words that carry no topical signal: pronouns, prepositions,
//! conjunctions, auxiliaries and common adverbs. Entries are lowercase and
//! use comma-below diacritics; cedilla variants are listed where they still
//! show up in scraped text.

pub const ROMANIAN: &[&str] = &[
    "a", "abia", "acea", "aceasta", "această", "aceea", "aceeasi", "aceeași", "acei", "aceia",
    "acel", "acela", "acelasi", "același", "acele", "acelea", "acest", "acesta", "aceste",
    "acestea", "acestei", "acestia", "aceștia", "acestui", "acestuia", "acolo", "acum", "adica",
    "adică", "ai", "aia", "aibă", "aici", "al", "ala", "ale", "alea", "alt", "alta", "altceva",
    "altcineva", "alte", "altfel", "alti", "alții", "altul", "am", "anume", "apoi", "ar", "are",
    "as", "aș", "asa", "așa", "asemenea", "asta", "astazi", "astăzi", "astea", "astfel", "asupra",
    "atare", "atat", "atât", "atata", "atâta", "atatea", "atâtea", "atatia", "atâția", "ati",
    "ați", "atit", "atita", "atitea", "atitia", "atunci", "au", "avea", "avem", "aveți", "avut",
    "azi", "ba", "bine", "ca", "că", "cam", "cand", "când", "care", "careia", "căreia", "carora",
    "cărora", "caruia", "căruia", "cat", "cât", "catre", "către", "ce", "cea", "ceea", "cei",
    "ceilalti", "ceilalți", "cel", "cele", "celor", "ceva", "chiar", "ci", "cind", "cine",
    "cineva", "cit", "cita", "cite", "citi", "cui", "cum", "cumva", "da", "daca", "dacă", "dar",
    "dat", "de", "deasupra", "deci", "decit", "decât", "degraba", "deja", "deoarece", "departe",
    "desi", "deși", "despre", "din", "dinaintea", "dintr", "dintre", "doar", "dupa", "după",
    "ea", "ei", "el", "ele", "era", "este", "eu", "exact", "fata", "față", "fi", "fie", "fiecare",
    "fii", "fim", "fiu", "fiți", "foarte", "fost", "frumos", "i", "ia", "iar", "ieri", "ii",
    "îi", "il", "îl", "imi", "îmi", "in", "în", "inainte", "înainte", "inapoi", "înapoi", "inca",
    "încă", "incit", "insa", "însă", "intr", "într", "intre", "între", "isi", "își", "iti", "îți",
    "la", "le", "li", "lor", "lui", "mai", "mare", "mea", "mei", "mele", "mereu", "meu", "mi",
    "mie", "mine", "mod", "mult", "multa", "multă", "multe", "multi", "mulți", "ne", "nici",
    "nimeni", "nimic", "niste", "niște", "noi", "nostri", "noștri", "nostru", "noastră", "nou",
    "noua", "nouă", "nu", "numai", "o", "or", "ori", "oricare", "orice", "oricine", "oricum",
    "oriunde", "pai", "păi", "parca", "parcă", "pe", "pentru", "peste", "pina", "până", "plus",
    "poate", "pot", "prea", "prin", "printr", "putini", "puțini", "sa", "să", "sai", "sale", "sau",
    "se", "si", "și", "sint", "sintem", "sînt", "spre", "sub", "sunt", "suntem", "sunteți",
    "sus", "ta", "tai", "tăi", "tale", "tau", "tău", "te", "ti", "ți", "tie", "ție", "tine",
    "toata", "toată", "toate", "tot", "toti", "toți", "totusi", "totuși", "tu", "tuturor", "un",
    "una", "unde", "undeva", "unei", "unele", "uneori", "unii", "unor", "unora", "unu", "unui",
    "unuia", "va", "vă", "vi", "voastră", "voastre", "voi", "vom", "vor", "vostru", "vouă",
    "vreo", "vreun", "ş", "şi", "ţi", "îţi", "aşa",
];
