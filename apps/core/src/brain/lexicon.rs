//! Static word lists for the rule-based pipeline: stop words, irregular lemmas
//! and small gazetteers used to label entities.

/// Stopwords for French language
pub const STOPWORDS_FR: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "d", "l", "et", "ou", "où", "mais",
    "donc", "or", "ni", "car", "je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles",
    "me", "te", "se", "lui", "leur", "y", "en", "mon", "ton", "son", "ma", "ta", "sa", "mes",
    "tes", "ses", "notre", "votre", "nos", "vos", "leurs", "ce", "cet", "cette", "ces", "ça",
    "ceci", "cela", "qui", "que", "quoi", "dont", "lequel", "laquelle", "ne", "pas", "plus",
    "moins", "très", "trop", "peu", "être", "est", "sont", "était", "étaient", "sera",
    "seront", "suis", "es", "sommes", "êtes", "avoir", "ai", "as", "a", "avons", "avez", "ont",
    "avait", "avaient", "faire", "fait", "fais", "font", "aller", "va", "vais", "vas", "vont",
    "dans", "sur", "sous", "avec", "sans", "pour", "par", "entre", "avant", "après",
    "pendant", "depuis", "jusqu", "ici", "là", "voici", "voilà", "quand", "comment",
    "pourquoi", "combien", "tout", "tous", "toute", "toutes", "autre", "autres", "même",
    "aussi", "encore", "déjà", "si", "alors", "ainsi", "comme", "parce", "puisque",
    "lorsque", "oui", "non", "c", "n", "s", "t", "qu", "j", "m", "à", "au", "aux", "moi",
    "toi",
];

/// Stopwords for English language
pub const STOPWORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "nor", "for", "yet", "so", "i", "you", "he", "she", "it",
    "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their",
    "this", "that", "these", "those", "who", "whom", "which", "what", "whose", "is", "am", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "shall", "should", "can", "could", "may", "might", "must", "in", "on", "at", "to",
    "from", "by", "with", "about", "into", "through", "during", "before", "after", "up", "down",
    "out", "off", "over", "under", "again", "here", "there", "where", "when", "why", "how", "all",
    "each", "both", "few", "more", "most", "other", "some", "any", "no", "not", "only", "own",
    "same", "than", "too", "very", "just", "also", "now", "then", "if", "because", "as", "until",
    "while", "s", "t", "ve", "re", "ll", "d", "m", "of",
];

/// Inflected forms whose lemma cannot be found by suffix stripping.
pub const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    // French
    ("suis", "être"), ("es", "être"), ("est", "être"), ("sommes", "être"), ("êtes", "être"),
    ("sont", "être"), ("était", "être"), ("été", "être"),
    ("ai", "avoir"), ("as", "avoir"), ("a", "avoir"), ("avons", "avoir"), ("avez", "avoir"),
    ("ont", "avoir"), ("eu", "avoir"),
    ("vais", "aller"), ("vas", "aller"), ("va", "aller"), ("allons", "aller"),
    ("allez", "aller"), ("vont", "aller"),
    ("fais", "faire"), ("fait", "faire"), ("faisons", "faire"), ("faites", "faire"),
    ("font", "faire"),
    ("peux", "pouvoir"), ("peut", "pouvoir"), ("pouvons", "pouvoir"), ("pouvez", "pouvoir"),
    ("peuvent", "pouvoir"), ("pu", "pouvoir"),
    ("veux", "vouloir"), ("veut", "vouloir"), ("voulons", "vouloir"), ("voulez", "vouloir"),
    ("veulent", "vouloir"),
    ("sais", "savoir"), ("sait", "savoir"), ("savez", "savoir"),
    ("yeux", "œil"), ("travaux", "travail"),
    // English
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("has", "have"), ("had", "have"), ("did", "do"), ("does", "do"), ("went", "go"),
    ("children", "child"), ("people", "person"), ("men", "man"), ("women", "woman"),
];

/// Courtesy titles that introduce a person's name.
pub const PERSON_TITLES: &[&str] = &[
    "monsieur", "madame", "mademoiselle", "docteur", "professeur", "maître",
    "m", "mme", "mlle", "dr", "pr", "mr", "mrs", "ms", "sir",
];

/// Common first names; a capitalized span starting with one of these is a person.
pub const FIRST_NAMES: &[&str] = &[
    "marie", "jean", "pierre", "paul", "jacques", "louis", "sophie", "camille", "julie",
    "nicolas", "thomas", "léa", "emma", "lucas", "hugo", "chloé", "manon", "antoine",
    "kenza", "amina", "mohamed", "sarah", "david", "john", "mary", "james", "michael",
    "emily", "alice", "bob",
];

pub const LOCATIONS: &[&str] = &[
    "paris", "lyon", "marseille", "toulouse", "bordeaux", "lille", "nantes", "strasbourg",
    "nice", "montpellier", "rennes", "france", "belgique", "suisse", "canada", "québec",
    "maroc", "algérie", "tunisie", "sénégal", "espagne", "italie", "allemagne",
    "angleterre", "londres", "bruxelles", "genève", "montréal", "rabat", "casablanca",
    "europe", "afrique", "asie", "amérique", "new york", "london", "berlin", "madrid",
    "rome", "tokyo", "usa", "seine", "loire", "alpes",
];

pub const ORGANIZATIONS: &[&str] = &[
    "google", "microsoft", "apple", "amazon", "meta", "facebook", "openai", "mistral ai",
    "ollama", "onu", "unesco", "sncf", "ratp", "edf", "airbus", "renault", "peugeot",
    "total", "orange", "l'oréal", "danone", "sorbonne", "cnrs", "nasa", "union européenne",
];

/// Trailing words that mark a span as an organization.
pub const ORGANIZATION_SUFFIXES: &[&str] = &[
    "inc", "sa", "sas", "sarl", "ltd", "llc", "corp", "group", "groupe", "université",
    "university", "institut", "institute", "association", "banque", "bank",
];
