//! 静态题库数据
//! 按主题关键词组织的测验题与练习题，以及少儿内容与聊天知识库用到的数据表

use crate::models::Difficulty;

/// 题库条目，生成时再转换为带 id 的 QuizQuestion
pub(crate) struct BankQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub answer: &'static str,
    pub difficulty: Difficulty,
}

macro_rules! bank_q {
    ($q:expr, [$a:expr, $b:expr, $c:expr, $d:expr], $ans:expr, $diff:ident) => {
        BankQuestion {
            question: $q,
            options: [$a, $b, $c, $d],
            answer: $ans,
            difficulty: Difficulty::$diff,
        }
    };
}

pub(crate) static PYTHON_QUIZ: &[BankQuestion] = &[
    bank_q!(
        "What keyword is used to define a function in Python?",
        ["def", "function", "func", "define"],
        "def",
        Easy
    ),
    bank_q!(
        "Which of these is NOT a Python data type?",
        ["list", "tuple", "array", "dictionary"],
        "array",
        Medium
    ),
    bank_q!(
        "What is the output of: print(2 ** 3)?",
        ["5", "6", "8", "9"],
        "8",
        Easy
    ),
    bank_q!(
        "Which method is used to add an element to a list?",
        ["add()", "append()", "push()", "insert()"],
        "append()",
        Easy
    ),
    bank_q!(
        "What does 'self' represent in a Python class?",
        ["Class name", "Instance of the class", "Global variable", "Static method"],
        "Instance of the class",
        Medium
    ),
    bank_q!(
        "Which operator is used for floor division?",
        ["/", "//", "%", "div"],
        "//",
        Medium
    ),
    bank_q!(
        "What is a lambda function?",
        ["Named function", "Anonymous function", "Class method", "Built-in function"],
        "Anonymous function",
        Hard
    ),
    bank_q!(
        "Which module is used for regular expressions?",
        ["regex", "re", "regexp", "pattern"],
        "re",
        Medium
    ),
    bank_q!(
        "What is the correct way to create a dictionary?",
        ["{key: value}", "[key: value]", "(key: value)", "<key: value>"],
        "{key: value}",
        Easy
    ),
    bank_q!(
        "What does 'pip' stand for?",
        [
            "Python Install Package",
            "Pip Installs Packages",
            "Package Install Python",
            "Python Integrated Platform"
        ],
        "Pip Installs Packages",
        Hard
    ),
];

pub(crate) static SPACE_QUIZ: &[BankQuestion] = &[
    bank_q!(
        "How many planets are in our solar system?",
        ["7", "8", "9", "10"],
        "8",
        Easy
    ),
    bank_q!(
        "Which is the largest planet?",
        ["Jupiter", "Saturn", "Neptune", "Earth"],
        "Jupiter",
        Easy
    ),
    bank_q!(
        "Which planet is closest to the Sun?",
        ["Venus", "Mercury", "Earth", "Mars"],
        "Mercury",
        Easy
    ),
    bank_q!(
        "Which planet is known as the Red Planet?",
        ["Venus", "Mars", "Jupiter", "Saturn"],
        "Mars",
        Easy
    ),
    bank_q!(
        "Which planet has the most moons?",
        ["Saturn", "Jupiter", "Neptune", "Uranus"],
        "Saturn",
        Medium
    ),
    bank_q!(
        "What is the Sun primarily made of?",
        ["Oxygen", "Carbon", "Hydrogen", "Helium"],
        "Hydrogen",
        Medium
    ),
    bank_q!(
        "Which planet has rings visible from Earth?",
        ["Jupiter", "Saturn", "Uranus", "Neptune"],
        "Saturn",
        Easy
    ),
    bank_q!(
        "How long does it take Earth to orbit the Sun?",
        ["24 hours", "30 days", "365 days", "12 months"],
        "365 days",
        Easy
    ),
    bank_q!(
        "Which is the smallest planet?",
        ["Mercury", "Mars", "Venus", "Pluto"],
        "Mercury",
        Medium
    ),
    bank_q!(
        "What galaxy is our solar system in?",
        ["Andromeda", "Milky Way", "Whirlpool", "Triangulum"],
        "Milky Way",
        Medium
    ),
];

pub(crate) static BIOLOGY_QUIZ: &[BankQuestion] = &[
    bank_q!(
        "What is the primary product of photosynthesis?",
        ["Oxygen", "Glucose", "Carbon dioxide", "Water"],
        "Glucose",
        Medium
    ),
    bank_q!(
        "Which organelle performs photosynthesis?",
        ["Mitochondria", "Chloroplast", "Nucleus", "Ribosome"],
        "Chloroplast",
        Easy
    ),
    bank_q!(
        "What gas do plants absorb during photosynthesis?",
        ["Oxygen", "Nitrogen", "Carbon dioxide", "Hydrogen"],
        "Carbon dioxide",
        Easy
    ),
    bank_q!(
        "What pigment makes plants green?",
        ["Carotene", "Chlorophyll", "Xanthophyll", "Anthocyanin"],
        "Chlorophyll",
        Easy
    ),
    bank_q!(
        "Where does photosynthesis primarily occur?",
        ["Roots", "Stem", "Leaves", "Flowers"],
        "Leaves",
        Easy
    ),
    bank_q!(
        "What is the equation for photosynthesis?",
        [
            "6CO2 + 6H2O → C6H12O6 + 6O2",
            "C6H12O6 → 6CO2 + 6H2O",
            "2H2 + O2 → 2H2O",
            "N2 + 3H2 → 2NH3"
        ],
        "6CO2 + 6H2O → C6H12O6 + 6O2",
        Hard
    ),
    bank_q!(
        "Which light is most effective for photosynthesis?",
        ["Green", "Blue and Red", "Yellow", "Orange"],
        "Blue and Red",
        Medium
    ),
    bank_q!(
        "What is released as a byproduct?",
        ["Carbon dioxide", "Nitrogen", "Oxygen", "Hydrogen"],
        "Oxygen",
        Easy
    ),
    bank_q!(
        "What provides energy for photosynthesis?",
        ["Water", "Sunlight", "Soil", "Air"],
        "Sunlight",
        Easy
    ),
    bank_q!(
        "What are the tiny pores on leaves called?",
        ["Stomata", "Chloroplasts", "Veins", "Cuticle"],
        "Stomata",
        Medium
    ),
];

pub(crate) static MATH_QUIZ: &[BankQuestion] = &[
    bank_q!("What is 15% of 200?", ["25", "30", "35", "40"], "30", Medium),
    bank_q!("What is the square root of 144?", ["10", "11", "12", "13"], "12", Easy),
    bank_q!(
        "Solve: 2x + 5 = 15",
        ["x = 4", "x = 5", "x = 6", "x = 7"],
        "x = 5",
        Medium
    ),
    bank_q!("What is 7²?", ["14", "21", "49", "56"], "49", Easy),
    bank_q!(
        "What is the value of π (pi) approximately?",
        ["2.14", "3.14", "4.14", "5.14"],
        "3.14",
        Easy
    ),
    bank_q!(
        "What is the area of a rectangle with length 8 and width 5?",
        ["13", "26", "40", "45"],
        "40",
        Easy
    ),
    bank_q!(
        "Solve: 3(x - 2) = 12",
        ["x = 5", "x = 6", "x = 7", "x = 8"],
        "x = 6",
        Medium
    ),
    bank_q!("What is 25% as a fraction?", ["1/2", "1/3", "1/4", "1/5"], "1/4", Easy),
    bank_q!(
        "What is the Pythagorean theorem?",
        ["a + b = c", "a² + b² = c²", "a × b = c", "a² - b² = c²"],
        "a² + b² = c²",
        Medium
    ),
    bank_q!(
        "What is the slope of line y = 2x + 3?",
        ["1", "2", "3", "4"],
        "2",
        Hard
    ),
];

pub(crate) static HISTORY_QUIZ: &[BankQuestion] = &[
    bank_q!(
        "When did World War I start?",
        ["1912", "1914", "1916", "1918"],
        "1914",
        Medium
    ),
    bank_q!(
        "When did World War II end?",
        ["1943", "1944", "1945", "1946"],
        "1945",
        Easy
    ),
    bank_q!(
        "Who was the first President of the United States?",
        ["Thomas Jefferson", "George Washington", "John Adams", "Benjamin Franklin"],
        "George Washington",
        Easy
    ),
    bank_q!(
        "Which country built the Great Wall?",
        ["Japan", "Korea", "China", "Mongolia"],
        "China",
        Easy
    ),
    bank_q!(
        "When was the Declaration of Independence signed?",
        ["1775", "1776", "1777", "1778"],
        "1776",
        Medium
    ),
    bank_q!(
        "Who invented the telephone?",
        ["Thomas Edison", "Alexander Graham Bell", "Nikola Tesla", "Benjamin Franklin"],
        "Alexander Graham Bell",
        Easy
    ),
    bank_q!(
        "Which empire built the Colosseum?",
        ["Greek", "Roman", "Byzantine", "Ottoman"],
        "Roman",
        Easy
    ),
    bank_q!(
        "Who was the first person on the Moon?",
        ["Buzz Aldrin", "Neil Armstrong", "Yuri Gagarin", "John Glenn"],
        "Neil Armstrong",
        Easy
    ),
    bank_q!(
        "When did the Renaissance begin?",
        ["12th century", "13th century", "14th century", "15th century"],
        "14th century",
        Hard
    ),
    bank_q!(
        "Who wrote the Declaration of Independence?",
        ["George Washington", "Benjamin Franklin", "Thomas Jefferson", "John Adams"],
        "Thomas Jefferson",
        Medium
    ),
];

pub(crate) static GEOGRAPHY_QUIZ: &[BankQuestion] = &[
    bank_q!(
        "What is the capital of France?",
        ["London", "Paris", "Berlin", "Rome"],
        "Paris",
        Easy
    ),
    bank_q!(
        "What is the capital of Japan?",
        ["Tokyo", "Kyoto", "Osaka", "Seoul"],
        "Tokyo",
        Easy
    ),
    bank_q!(
        "Which is the largest country by area?",
        ["Canada", "China", "USA", "Russia"],
        "Russia",
        Easy
    ),
    bank_q!(
        "What is the capital of Australia?",
        ["Sydney", "Melbourne", "Canberra", "Brisbane"],
        "Canberra",
        Medium
    ),
    bank_q!(
        "Which continent is Egypt in?",
        ["Asia", "Africa", "Europe", "Middle East"],
        "Africa",
        Easy
    ),
    bank_q!(
        "What is the tallest mountain in the world?",
        ["K2", "Mount Everest", "Kilimanjaro", "Denali"],
        "Mount Everest",
        Easy
    ),
    bank_q!(
        "Which ocean is the largest?",
        ["Atlantic", "Indian", "Pacific", "Arctic"],
        "Pacific",
        Easy
    ),
    bank_q!(
        "What is the capital of Brazil?",
        ["Rio de Janeiro", "São Paulo", "Brasília", "Salvador"],
        "Brasília",
        Medium
    ),
    bank_q!(
        "Which country has the most population?",
        ["India", "China", "USA", "Indonesia"],
        "China",
        Medium
    ),
    bank_q!(
        "What is the longest river in the world?",
        ["Amazon", "Nile", "Yangtze", "Mississippi"],
        "Nile",
        Hard
    ),
];

pub(crate) static SCIENCE_QUIZ: &[BankQuestion] = &[
    bank_q!(
        "What is the speed of light?",
        ["300,000 km/s", "150,000 km/s", "500,000 km/s", "1,000,000 km/s"],
        "300,000 km/s",
        Medium
    ),
    bank_q!(
        "What is gravity on Earth approximately?",
        ["8.8 m/s²", "9.8 m/s²", "10.8 m/s²", "11.8 m/s²"],
        "9.8 m/s²",
        Easy
    ),
    bank_q!(
        "Who developed the theory of relativity?",
        ["Isaac Newton", "Albert Einstein", "Galileo Galilei", "Stephen Hawking"],
        "Albert Einstein",
        Easy
    ),
    bank_q!(
        "What is the smallest unit of matter?",
        ["Molecule", "Atom", "Proton", "Quark"],
        "Atom",
        Medium
    ),
    bank_q!(
        "What force opposes motion?",
        ["Gravity", "Friction", "Magnetism", "Inertia"],
        "Friction",
        Easy
    ),
    bank_q!(
        "What is the formula for force?",
        ["F = m × a", "F = m × v", "F = m / a", "F = a / m"],
        "F = m × a",
        Medium
    ),
    bank_q!(
        "What is the SI unit of energy?",
        ["Watt", "Newton", "Joule", "Pascal"],
        "Joule",
        Medium
    ),
    bank_q!(
        "What travels faster: light or sound?",
        ["Light", "Sound", "Same speed", "Depends on medium"],
        "Light",
        Easy
    ),
    bank_q!(
        "What is the charge of an electron?",
        ["Positive", "Negative", "Neutral", "Variable"],
        "Negative",
        Easy
    ),
    bank_q!(
        "What is the first law of thermodynamics?",
        [
            "Energy cannot be created or destroyed",
            "F = ma",
            "E = mc²",
            "Every action has a reaction"
        ],
        "Energy cannot be created or destroyed",
        Hard
    ),
];

/// 主题关键词组，顺序即匹配优先级
pub(crate) static QUIZ_KEYWORD_GROUPS: &[(&[&str], &[BankQuestion])] = &[
    (&["python"], PYTHON_QUIZ),
    (&["solar", "planet", "space"], SPACE_QUIZ),
    (&["photo", "biology", "plant"], BIOLOGY_QUIZ),
    (&["math", "algebra"], MATH_QUIZ),
    (&["history", "war"], HISTORY_QUIZ),
    (&["geo", "capital", "country"], GEOGRAPHY_QUIZ),
    (&["science", "physics"], SCIENCE_QUIZ),
];

/// 按主题关键词选择题库，未命中返回 None
pub(crate) fn quiz_bank_for(topic_lower: &str) -> Option<&'static [BankQuestion]> {
    QUIZ_KEYWORD_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| topic_lower.contains(k)))
        .map(|(_, bank)| *bank)
}

// ==================== 练习题库 ====================

/// 练习选择题条目
pub(crate) struct BankProblem {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub answer: &'static str,
    pub solution: &'static str,
}

macro_rules! bank_p {
    ($q:expr, [$a:expr, $b:expr, $c:expr, $d:expr], $ans:expr, $sol:expr) => {
        BankProblem { question: $q, options: [$a, $b, $c, $d], answer: $ans, solution: $sol }
    };
}

pub(crate) static PYTHON_PRACTICE: &[BankProblem] = &[
    bank_p!(
        "Write a function that takes a list of numbers and returns the sum.",
        [
            "def sum_list(nums): return sum(nums)",
            "def sum_list(nums): return nums.sum()",
            "def sum_list(nums): return add(nums)",
            "def sum_list(nums): return total(nums)"
        ],
        "def sum_list(nums): return sum(nums)",
        "Python's built-in sum() function returns the sum of all items in an iterable. This is the correct and Pythonic way to sum a list."
    ),
    bank_p!(
        "How do you create an empty dictionary in Python?",
        ["{}", "[]", "()", "dict()"],
        "{}",
        "An empty dictionary is created using {} curly braces. You can also use dict() but {} is more common and faster."
    ),
    bank_p!(
        "What is the output of: print(type([1, 2, 3]))?",
        ["<class 'list'>", "<class 'array'>", "<class 'tuple'>", "<class 'set'>"],
        "<class 'list'>",
        "The type() function returns the type of an object. [1, 2, 3] is a list, so it returns <class 'list'>."
    ),
    bank_p!(
        "Write a list comprehension to get all even numbers from 1 to 10.",
        [
            "[x for x in range(1, 11) if x % 2 == 0]",
            "[x for x in range(10) if x % 2]",
            "[x if x % 2 == 0 for x in range(10)]",
            "[x for x in range(1, 10) where x % 2 == 0]"
        ],
        "[x for x in range(1, 11) if x % 2 == 0]",
        "List comprehension syntax: [expression for item in iterable if condition]. range(1, 11) gives 1-10, x % 2 == 0 checks if even."
    ),
    bank_p!(
        "What does the 'self' parameter represent in a Python class method?",
        ["The instance of the class", "The class itself", "A global variable", "The parent class"],
        "The instance of the class",
        "'self' refers to the instance of the class. It's used to access instance variables and methods. It's the first parameter in instance methods."
    ),
];

pub(crate) static MATH_PRACTICE: &[BankProblem] = &[
    bank_p!(
        "Solve for x: 3x + 7 = 22",
        ["x = 5", "x = 6", "x = 7", "x = 8"],
        "x = 5",
        "Step 1: 3x + 7 = 22\nStep 2: 3x = 22 - 7\nStep 3: 3x = 15\nStep 4: x = 15/3 = 5"
    ),
    bank_p!(
        "What is 20% of 150?",
        ["25", "30", "35", "40"],
        "30",
        "20% = 20/100 = 0.2\n0.2 × 150 = 30\nOr: (20 × 150) / 100 = 3000 / 100 = 30"
    ),
    bank_p!(
        "If a rectangle has length 12 cm and width 5 cm, what is its perimeter?",
        ["17 cm", "34 cm", "60 cm", "30 cm"],
        "34 cm",
        "Perimeter = 2(length + width)\n= 2(12 + 5)\n= 2(17)\n= 34 cm"
    ),
    bank_p!(
        "Simplify: (2x + 3) + (4x - 5)",
        ["6x - 2", "6x + 2", "2x - 2", "6x - 8"],
        "6x - 2",
        "(2x + 3) + (4x - 5)\n= 2x + 4x + 3 - 5\n= 6x - 2"
    ),
    bank_p!(
        "What is the value of 5² - 3²?",
        ["4", "16", "8", "2"],
        "16",
        "5² = 25\n3² = 9\n25 - 9 = 16"
    ),
];

pub(crate) static SCIENCE_PRACTICE: &[BankProblem] = &[
    bank_p!(
        "A car accelerates from 0 to 20 m/s in 5 seconds. What is its acceleration?",
        ["2 m/s²", "4 m/s²", "5 m/s²", "10 m/s²"],
        "4 m/s²",
        "Acceleration = (Final velocity - Initial velocity) / Time\na = (20 - 0) / 5 = 20 / 5 = 4 m/s²"
    ),
    bank_p!(
        "If a 10 kg object is lifted 2 meters, how much work is done? (g = 10 m/s²)",
        ["20 J", "100 J", "200 J", "50 J"],
        "200 J",
        "Work = Force × Distance\nForce = mass × gravity = 10 × 10 = 100 N\nWork = 100 × 2 = 200 Joules"
    ),
    bank_p!(
        "What is the frequency of a wave with wavelength 2m traveling at 10 m/s?",
        ["2 Hz", "5 Hz", "10 Hz", "20 Hz"],
        "5 Hz",
        "Frequency = Speed / Wavelength\nf = v / λ = 10 / 2 = 5 Hz"
    ),
    bank_p!(
        "How much force is needed to accelerate a 5 kg object at 3 m/s²?",
        ["8 N", "15 N", "2 N", "1.67 N"],
        "15 N",
        "Newton's 2nd Law: F = ma\nF = 5 kg × 3 m/s² = 15 N"
    ),
    bank_p!(
        "A ball is dropped from 20m. How long does it take to hit the ground? (g = 10 m/s²)",
        ["1 s", "2 s", "4 s", "10 s"],
        "2 s",
        "Using s = ½gt²\n20 = ½ × 10 × t²\n20 = 5t²\nt² = 4\nt = 2 seconds"
    ),
];

pub(crate) static BIOLOGY_PRACTICE: &[BankProblem] = &[
    bank_p!(
        "Which organelle is responsible for producing ATP (energy)?",
        ["Mitochondria", "Nucleus", "Ribosome", "Golgi apparatus"],
        "Mitochondria",
        "Mitochondria are called the 'powerhouse of the cell' because they produce ATP through cellular respiration."
    ),
    bank_p!(
        "What process do cells use to divide for growth and repair?",
        ["Mitosis", "Meiosis", "Photosynthesis", "Respiration"],
        "Mitosis",
        "Mitosis is cell division that produces two identical daughter cells for growth and repair. Meiosis produces sex cells."
    ),
    bank_p!(
        "In which phase of mitosis do chromosomes line up in the middle?",
        ["Metaphase", "Prophase", "Anaphase", "Telophase"],
        "Metaphase",
        "Metaphase: chromosomes line up at the metaphase plate (middle). Think 'M' for middle."
    ),
    bank_p!(
        "What is the complementary DNA strand to: ATGC?",
        ["TACG", "AUGC", "ATGC", "GCTA"],
        "TACG",
        "DNA base pairing: A pairs with T, G pairs with C. So ATGC → TACG"
    ),
    bank_p!(
        "Which type of blood cell fights infections?",
        ["White blood cells", "Red blood cells", "Platelets", "Plasma"],
        "White blood cells",
        "White blood cells (leukocytes) are part of the immune system and fight infections. Red blood cells carry oxygen."
    ),
];

pub(crate) static GEOGRAPHY_PRACTICE: &[BankProblem] = &[
    bank_p!(
        "Which ocean is the largest?",
        ["Pacific Ocean", "Atlantic Ocean", "Indian Ocean", "Arctic Ocean"],
        "Pacific Ocean",
        "The Pacific Ocean covers ~165 million km², making it the largest and deepest ocean."
    ),
    bank_p!(
        "On which continent is the Sahara Desert?",
        ["Africa", "Asia", "Australia", "South America"],
        "Africa",
        "The Sahara Desert is in North Africa, covering most of the continent's northern region."
    ),
    bank_p!(
        "How many continents are there?",
        ["7", "5", "6", "8"],
        "7",
        "The 7 continents are: Asia, Africa, North America, South America, Antarctica, Europe, and Australia."
    ),
    bank_p!(
        "What is the capital of Canada?",
        ["Ottawa", "Toronto", "Vancouver", "Montreal"],
        "Ottawa",
        "Ottawa is the capital of Canada. Toronto is the largest city, but not the capital."
    ),
    bank_p!(
        "Which river is the longest in the world?",
        ["Nile River", "Amazon River", "Yangtze River", "Mississippi River"],
        "Nile River",
        "The Nile River (6,650 km) is generally considered the longest, though Amazon carries more water."
    ),
];

/// 练习题关键词组
pub(crate) static PRACTICE_KEYWORD_GROUPS: &[(&[&str], &[BankProblem])] = &[
    (&["python"], PYTHON_PRACTICE),
    (&["math", "algebra"], MATH_PRACTICE),
    (&["science", "physics"], SCIENCE_PRACTICE),
    (&["biology", "cell"], BIOLOGY_PRACTICE),
    (&["geo", "capital"], GEOGRAPHY_PRACTICE),
];

pub(crate) fn practice_bank_for(topic_lower: &str) -> Option<&'static [BankProblem]> {
    PRACTICE_KEYWORD_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| topic_lower.contains(k)))
        .map(|(_, bank)| *bank)
}

// ==================== 少儿内容数据 ====================

/// 字母示例词 A-Z
pub(crate) static ALPHABET_EXAMPLES: &[(char, &str)] = &[
    ('A', "Apple"),
    ('B', "Ball"),
    ('C', "Cat"),
    ('D', "Dog"),
    ('E', "Elephant"),
    ('F', "Fish"),
    ('G', "Goat"),
    ('H', "House"),
    ('I', "Ice cream"),
    ('J', "Juice"),
    ('K', "Kite"),
    ('L', "Lion"),
    ('M', "Monkey"),
    ('N', "Nest"),
    ('O', "Orange"),
    ('P', "Pen"),
    ('Q', "Queen"),
    ('R', "Rabbit"),
    ('S', "Sun"),
    ('T', "Tree"),
    ('U', "Umbrella"),
    ('V', "Van"),
    ('W', "Water"),
    ('X', "Xylophone"),
    ('Y', "Yellow"),
    ('Z', "Zebra"),
];

/// 数数示例物品，下标 i 对应数字 i+1
pub(crate) static COUNT_ITEMS: &[&str] = &[
    "apple", "ball", "star", "flower", "bird", "car", "book", "toy", "tree", "heart",
];

pub(crate) static COLORS: &[&str] = &[
    "Red - Like an apple",
    "Blue - Like the sky",
    "Yellow - Like the sun",
    "Green - Like grass",
    "Orange - Like an orange fruit",
    "Purple - Like grapes",
    "Pink - Like a flower",
    "Brown - Like chocolate",
    "Black - Like night",
    "White - Like snow",
];

pub(crate) static SHAPES: &[&str] = &[
    "Circle - Round like a ball",
    "Square - Four equal sides",
    "Triangle - Three sides",
    "Rectangle - Four sides, two long",
    "Oval - Like an egg",
    "Star - Points in the sky",
    "Heart - Symbol of love",
    "Diamond - Like a gem",
];

pub(crate) static RHYMES: &[(&str, &str, &str)] = &[
    ("Twinkle Twinkle Little Star", "Twinkle, twinkle, little star,", "How I wonder what you are!"),
    ("Mary Had a Little Lamb", "Mary had a little lamb,", "Its fleece was white as snow."),
    ("Baa Baa Black Sheep", "Baa, baa, black sheep,", "Have you any wool?"),
    ("Humpty Dumpty", "Humpty Dumpty sat on a wall,", "Humpty Dumpty had a great fall."),
    ("Jack and Jill", "Jack and Jill went up the hill,", "To fetch a pail of water."),
];

// ==================== 聊天知识库数据 ====================

/// 国家首都问答表，键为国家关键词
pub(crate) static CAPITALS: &[(&str, &str)] = &[
    ("france", "The capital of France is Paris, known for the Eiffel Tower, Louvre Museum, and as a center of art, fashion, and culture."),
    ("spain", "The capital of Spain is Madrid, famous for its museums like the Prado, Royal Palace, and vibrant culture."),
    ("germany", "The capital of Germany is Berlin, known for its history, Brandenburg Gate, and as a hub of arts and technology."),
    ("italy", "The capital of Italy is Rome, the Eternal City, famous for the Colosseum, Vatican City, and ancient history."),
    ("japan", "The capital of Japan is Tokyo, a modern metropolis known for technology, culture, and as one of the world's largest cities."),
    ("china", "The capital of China is Beijing, home to the Forbidden City, Great Wall access, and China's political center."),
    ("india", "The capital of India is New Delhi, known for India Gate, Parliament, and as the administrative center."),
    ("usa", "The capital of the United States is Washington, D.C., home to the White House, Capitol, and Supreme Court."),
    ("america", "The capital of the United States is Washington, D.C., home to the White House, Capitol, and Supreme Court."),
    ("uk", "The capital of the United Kingdom is London, famous for Big Ben, Buckingham Palace, and as a global financial center."),
    ("england", "The capital of the United Kingdom is London, famous for Big Ben, Buckingham Palace, and as a global financial center."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_quiz_banks_well_formed() {
        for (keywords, bank) in QUIZ_KEYWORD_GROUPS {
            assert!(!keywords.is_empty());
            for q in *bank {
                assert!(
                    q.options.contains(&q.answer),
                    "answer {:?} missing from options of {:?}",
                    q.answer,
                    q.question
                );
            }
        }
    }

    #[test]
    fn test_all_practice_banks_have_five_mcqs() {
        for (_, bank) in PRACTICE_KEYWORD_GROUPS {
            assert_eq!(bank.len(), 5);
            for p in *bank {
                assert!(p.options.contains(&p.answer));
                assert!(!p.solution.is_empty());
            }
        }
    }

    #[test]
    fn test_keyword_dispatch_order() {
        assert!(quiz_bank_for("python basics").is_some());
        assert!(std::ptr::eq(
            quiz_bank_for("python basics").unwrap().as_ptr(),
            PYTHON_QUIZ.as_ptr()
        ));
        assert!(std::ptr::eq(
            quiz_bank_for("the solar system").unwrap().as_ptr(),
            SPACE_QUIZ.as_ptr()
        ));
        // "photo" 先于 "science" 匹配
        assert!(std::ptr::eq(
            quiz_bank_for("photosynthesis science").unwrap().as_ptr(),
            BIOLOGY_QUIZ.as_ptr()
        ));
        assert!(quiz_bank_for("xyz123").is_none());
    }

    #[test]
    fn test_alphabet_covers_a_to_z() {
        assert_eq!(ALPHABET_EXAMPLES.len(), 26);
        assert_eq!(ALPHABET_EXAMPLES[0].0, 'A');
        assert_eq!(ALPHABET_EXAMPLES[25].0, 'Z');
    }
}
